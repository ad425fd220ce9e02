//! The fixed therapeutic category tables.
//!
//! Declaration order is load-bearing: scoring ties are broken by the first
//! category encountered in this order.

/// Column holding the free-text stated use of a herb. Keyword hits here
/// score at full weight.
pub const TRADITIONAL_USE_COLUMN: &str = "Traditional Use";

/// Category returned when no signal matches anywhere in a record.
pub const FALLBACK_CATEGORY: &str = "Medicinal Herbs";

/// One therapeutic category: its keyword list and, where defined, the
/// medicinal-value columns whose rating flags count toward it.
#[derive(Debug, Clone, Copy)]
pub struct CategoryProfile {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    /// Rating columns owned by this category; empty for categories that do
    /// not participate in the rating-flag step.
    pub rating_columns: &'static [&'static str],
}

/// The nine categories, in tie-breaking order.
pub const CATEGORIES: [CategoryProfile; 9] = [
    CategoryProfile {
        name: "Digestive",
        keywords: &[
            "digestion",
            "indigestion",
            "gas",
            "bloating",
            "acidity",
            "heartburn",
            "diarrhea",
            "nausea",
            "colic",
            "flatulence",
            "gut",
            "stomach",
        ],
        rating_columns: &[
            "Indigestion",
            "Gas / Bloating",
            "Acidity / Heartburn",
            "Mild Diarrhea",
            "Nausea",
        ],
    },
    CategoryProfile {
        name: "Hormonal",
        keywords: &[
            "hormonal",
            "menstrual",
            "pcos",
            "endocrine",
            "pms",
            "menopause",
            "libido",
            "fertility",
            "galactagogue",
            "shukra",
        ],
        rating_columns: &["Hormonal impact"],
    },
    CategoryProfile {
        name: "Immunity",
        keywords: &[
            "immunity",
            "immunomodulator",
            "cold",
            "flu",
            "cough",
            "fever",
            "sore throat",
            "congestion",
            "bronchitis",
            "antiviral",
            "antimicrobial",
        ],
        rating_columns: &[
            "Common Cold",
            "Cough (Dry/Wet)",
            "Sore Throat",
            "Nasal Congestion",
            "Mild Seasonal Allergies",
            "Mild Fever",
            "Seasonal immunity",
        ],
    },
    CategoryProfile {
        name: "Stress & Sleep",
        keywords: &[
            "stress",
            "anxiety",
            "sleep",
            "insomnia",
            "sedative",
            "nervine",
            "adaptogenic",
            "cortisol",
            "hpa axis",
        ],
        rating_columns: &["Mild Stress/Anxiety", "Poor Sleep (Mild)"],
    },
    CategoryProfile {
        name: "Pain & Inflammation",
        keywords: &[
            "pain",
            "inflammation",
            "inflammatory",
            "analgesic",
            "aches",
            "headache",
            "arthritis",
            "antispasmodic",
        ],
        rating_columns: &["Body Aches", "Mild Headache"],
    },
    CategoryProfile {
        name: "Skin & Wounds",
        keywords: &[
            "skin",
            "acne",
            "itchy",
            "wounds",
            "cuts",
            "dermatitis",
            "psoriasis",
            "antifungal",
        ],
        rating_columns: &["Acne", "Itchy Skin", "Minor Cuts/Wounds"],
    },
    CategoryProfile {
        name: "Cognitive",
        keywords: &["cognitive", "nervine", "brain", "memory", "nootropic", "brahmi"],
        rating_columns: &[],
    },
    CategoryProfile {
        name: "Metabolic",
        keywords: &[
            "metabolic",
            "diabetes",
            "sugar",
            "glycemic",
            "cholesterol",
            "lipid",
            "insulin",
        ],
        rating_columns: &[],
    },
    CategoryProfile {
        name: "Detox & Liver",
        keywords: &["detox", "liver", "hepatoprotective", "jaundice", "amrita", "giloy"],
        rating_columns: &[],
    },
];
