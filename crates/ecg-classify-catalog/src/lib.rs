#![warn(missing_docs)]
//! # ecg-classify-catalog
//!
//! ## Purpose
//! Static display metadata for diagnostic classes returned by the prediction
//! service.
//!
//! ## Responsibilities
//! - Map short class codes (`NORM`, `MI`, ...) to name, description, severity
//!   tier, and icon token.
//! - Synthesize a placeholder entry for codes the catalog does not know.
//!
//! ## Error model
//! Lookup never fails; unknown codes resolve through [`lookup`] to an
//! `Abnormal` placeholder echoing the raw code.

/// Icon token used for unknown classes.
pub const UNKNOWN_ICON: &str = "fa-question-circle";

/// Description used for unknown classes.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown classification";

/// Coarse display severity of a diagnostic class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    /// No pathology indicated.
    Normal,
    /// Pathology worth review.
    Abnormal,
    /// Pathology needing prompt attention.
    Critical,
}

impl SeverityTier {
    /// Lower-case style token (`normal`, `abnormal`, `critical`).
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityTier::Normal => "normal",
            SeverityTier::Abnormal => "abnormal",
            SeverityTier::Critical => "critical",
        }
    }
}

/// Display metadata for one class code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationEntry {
    /// Class code as emitted by the service.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Severity tier used for styling.
    pub tier: SeverityTier,
    /// Icon token.
    pub icon: String,
    /// `false` for synthesized placeholder entries.
    pub known: bool,
}

struct CatalogRecord {
    code: &'static str,
    name: &'static str,
    description: &'static str,
    tier: SeverityTier,
    icon: &'static str,
}

impl CatalogRecord {
    fn to_entry(&self) -> ClassificationEntry {
        ClassificationEntry {
            code: self.code.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            tier: self.tier,
            icon: self.icon.to_string(),
            known: true,
        }
    }
}

static CATALOG: [CatalogRecord; 10] = [
    CatalogRecord {
        code: "NORM",
        name: "Normal ECG",
        description: "Normal sinus rhythm with no significant abnormalities detected",
        tier: SeverityTier::Normal,
        icon: "fa-heart",
    },
    CatalogRecord {
        code: "CD",
        name: "Conduction Disturbance",
        description: "Abnormal propagation of the electrical impulse through the heart",
        tier: SeverityTier::Abnormal,
        icon: "fa-bolt",
    },
    CatalogRecord {
        code: "HYP",
        name: "Hypertrophy",
        description: "Voltage and axis changes consistent with enlarged heart chambers",
        tier: SeverityTier::Abnormal,
        icon: "fa-expand",
    },
    CatalogRecord {
        code: "MI",
        name: "Myocardial Infarction",
        description: "Signs of heart muscle damage from interrupted blood supply",
        tier: SeverityTier::Critical,
        icon: "fa-heart-crack",
    },
    CatalogRecord {
        code: "STTC",
        name: "ST/T Change",
        description: "Deviation of the ST segment or T wave from baseline",
        tier: SeverityTier::Abnormal,
        icon: "fa-chart-line",
    },
    CatalogRecord {
        code: "LVH",
        name: "Left Ventricular Hypertrophy",
        description: "Thickened left ventricular wall inferred from QRS voltage criteria",
        tier: SeverityTier::Abnormal,
        icon: "fa-weight-hanging",
    },
    CatalogRecord {
        code: "LAFB/LPFB",
        name: "Fascicular Block",
        description: "Block of the left anterior or posterior fascicle",
        tier: SeverityTier::Abnormal,
        icon: "fa-code-branch",
    },
    CatalogRecord {
        code: "ISC_",
        name: "Ischemia",
        description: "Reduced blood flow to the heart muscle",
        tier: SeverityTier::Critical,
        icon: "fa-triangle-exclamation",
    },
    CatalogRecord {
        code: "IRBBB",
        name: "Incomplete Right Bundle Branch Block",
        description: "Partial delay of conduction through the right bundle branch",
        tier: SeverityTier::Abnormal,
        icon: "fa-diagram-project",
    },
    CatalogRecord {
        code: "IVCD",
        name: "Intraventricular Conduction Disturbance",
        description: "Non-specific widening of the QRS complex",
        tier: SeverityTier::Abnormal,
        icon: "fa-wave-square",
    },
];

/// Resolves display metadata for `code`.
///
/// Codes are matched exactly. Unknown codes yield a placeholder whose name is
/// the raw code, tier is [`SeverityTier::Abnormal`], and icon is
/// [`UNKNOWN_ICON`].
pub fn lookup(code: &str) -> ClassificationEntry {
    CATALOG
        .iter()
        .find(|record| record.code == code)
        .map(CatalogRecord::to_entry)
        .unwrap_or_else(|| ClassificationEntry {
            code: code.to_string(),
            name: code.to_string(),
            description: UNKNOWN_DESCRIPTION.to_string(),
            tier: SeverityTier::Abnormal,
            icon: UNKNOWN_ICON.to_string(),
            known: false,
        })
}

/// Returns every catalogued entry in declaration order.
pub fn entries() -> Vec<ClassificationEntry> {
    CATALOG.iter().map(CatalogRecord::to_entry).collect()
}
