// 📋 Configuration - Fixed vocabularies and conversion constants
// All lookup tables live here as data, not inline conditionals

/// 1 Crore = 10,000,000 absolute currency units
pub const CRORE_TO_RUPEES: f64 = 10_000_000.0;

/// Policy-in-force counts are reported in thousands
pub const THOUSAND: f64 = 1_000.0;

/// Fuzzy-match acceptance threshold on the 0-100 similarity scale
pub const FUZZY_MATCH_THRESHOLD: f64 = 92.0;

// ============================================================================
// CANONICAL INSURER NAMES
// ============================================================================

/// Cleaned-name -> display-name crosswalk for insurer standardization.
///
/// Declaration order matters: fuzzy matching breaks score ties in favor of
/// the first entry, so keep the list stable.
pub const CANONICAL_INSURERS: &[(&str, &str)] = &[
    ("life insurance corporation of india", "LIC"),
    ("lic of india", "LIC"),
    ("lic", "LIC"),
    ("aditya birla sunlife insurance company ltd", "ABSLI"),
    ("aditya birla sun life insurance company ltd", "ABSLI"),
    ("aditya birla sunlife", "ABSLI"),
    ("aditya birla sun life", "ABSLI"),
    ("aditya birla sunlife insurance co ltd", "ABSLI"),
    ("icici prudential life insurance company ltd", "ICICI Pru Life"),
    ("icici prudential life insurance", "ICICI Pru Life"),
    ("icici pru life", "ICICI Pru Life"),
    ("sbi life insurance company ltd", "SBI Life"),
    ("sbi life insurance", "SBI Life"),
    ("sbi life", "SBI Life"),
    ("max life insurance company ltd", "MaxLife"),
    ("max life insurance", "MaxLife"),
    ("maxlife insurance company ltd", "MaxLife"),
    ("maxlife", "MaxLife"),
    ("tata aia life insurance company ltd", "Tata AIA"),
    ("tata aia life insurance", "Tata AIA"),
    ("tata aia", "Tata AIA"),
    ("pnb metlife india insurance company ltd", "PNB Metlife"),
    ("pnb metlife india insurance", "PNB Metlife"),
    ("pnb metlife", "PNB Metlife"),
    ("canara hsbc obc life insurance company ltd", "Canara HSBC"),
    ("canara hsbc life insurance company ltd", "Canara HSBC"),
    ("canara hsbc life insurance", "Canara HSBC"),
    ("canara hsbc", "Canara HSBC"),
    ("hdfc life insurance company ltd", "HDFC Life"),
    ("hdfc life insurance", "HDFC Life"),
    ("hdfc life", "HDFC Life"),
    ("kotak mahindra life insurance ltd", "Kotak Life"),
    ("kotak mahindra life insurance", "Kotak Life"),
    ("kotak life", "Kotak Life"),
    ("bajaj allianz life insurance company ltd", "Bajaj Allianz Life"),
    ("bajaj allianz life insurance", "Bajaj Allianz Life"),
    ("bajaj allianz life", "Bajaj Allianz Life"),
    ("bharti axa life insurance company ltd", "Bharti AXA Life"),
    ("bharti axa life insurance", "Bharti AXA Life"),
    ("bharti axa life", "Bharti AXA Life"),
    ("exide life insurance company ltd", "Exide Life"),
    ("exide life insurance", "Exide Life"),
    ("exide life", "Exide Life"),
    ("aviva life insurance company india ltd", "Aviva Life"),
    ("aviva life insurance", "Aviva Life"),
    ("aviva life", "Aviva Life"),
    ("ageas federal life insurance company ltd", "Ageas Federal Life"),
    ("ageas federal life insurance", "Ageas Federal Life"),
    ("ageas federal life", "Ageas Federal Life"),
    ("future generali india life insurance company ltd", "Future Generali Life"),
    ("future generali india life insurance", "Future Generali Life"),
    ("future generali life", "Future Generali Life"),
    ("edelweiss tokio life insurance company ltd", "Edelweiss Tokio Life"),
    ("edelweiss tokio life insurance", "Edelweiss Tokio Life"),
    ("edelweiss tokio life", "Edelweiss Tokio Life"),
    ("indiafirst life insurance company ltd", "IndiaFirst Life"),
    ("indiafirst life insurance", "IndiaFirst Life"),
    ("indiafirst life", "IndiaFirst Life"),
    ("bandhan life insurance company ltd", "Bandhan Life"),
    ("bandhan life insurance ltd", "Bandhan Life"),
    ("bandhan life insurance", "Bandhan Life"),
    ("bandhan life", "Bandhan Life"),
    ("acko life insurance ltd", "Acko Life"),
    ("acko life insurance", "Acko Life"),
    ("acko life", "Acko Life"),
    ("credit access life", "Credit Access Life"),
    ("creditaccess life insurance ltd", "Credit Access Life"),
    ("go digit life", "Go Digit Life"),
    ("go digit life insurance", "Go Digit Life"),
    ("go digit life insurance limited", "Go Digit Life"),
    ("pramerica life insurance ltd", "Pramerica Life"),
    ("pramerica life insurance", "Pramerica Life"),
    ("pramerica life", "Pramerica Life"),
    ("reliance nippon life insurance company ltd", "Reliance Nippon Life"),
    ("reliance nippon life insurance", "Reliance Nippon Life"),
    ("reliance nippon life", "Reliance Nippon Life"),
    ("sahara india life insurance company ltd", "Sahara India Life"),
    ("sahara india life insurance", "Sahara India Life"),
    ("sahara india life", "Sahara India Life"),
    ("shriram life insurance company ltd", "Shriram Life"),
    ("shriram life insurance", "Shriram Life"),
    ("shriram life", "Shriram Life"),
    ("star union dai-ichi life insurance company ltd", "Star Union Dai-ichi Life"),
    ("star union dai-ichi life insurance", "Star Union Dai-ichi Life"),
    ("star union dai-ichi life", "Star Union Dai-ichi Life"),
    ("aegon life insurance company ltd", "Aegon Life"),
    ("aegon life insurance", "Aegon Life"),
    ("aegon life", "Aegon Life"),
];

// ============================================================================
// DISTRIBUTION CHANNELS
// ============================================================================

/// Lowercased source label -> canonical channel name
pub const CHANNEL_VOCABULARY: &[(&str, &str)] = &[
    ("individual agents", "Individual Agents"),
    ("corporate agents - banks", "Corporate Agents - Banks"),
    ("corporate agents banks", "Corporate Agents - Banks"),
    ("banks", "Corporate Agents - Banks"),
    ("corporate agents - others", "Corporate Agents - Others"),
    ("corporate agents others", "Corporate Agents - Others"),
    ("others*", "Corporate Agents - Others"),
    ("brokers", "Brokers"),
    ("direct selling", "Direct Selling"),
    ("mi agents", "MI Agents"),
    ("common service centres", "CSCs"),
    ("common service centres (cscs)", "CSCs"),
    ("cscs", "CSCs"),
    ("web aggregators", "Web Aggregators"),
    ("imf", "IMF"),
    ("online", "Online"),
    ("online**", "Online"),
    ("point of sales", "POS"),
    ("point of sales (pos)", "POS"),
    ("pos", "POS"),
    ("others if any", "Others"),
    ("others", "Others"),
    ("referrals", "Referrals"),
];

// ============================================================================
// PRODUCT CATEGORY HEADERS
// ============================================================================

/// Category header row fragments -> (L1, L2, L3), used by the business-in-force
/// layouts. Checked by substring in declaration order, first hit wins.
pub const CATEGORY_HEADERS: &[(&str, (&str, &str, &str))] = &[
    ("non linked life business", ("Non-Linked", "", "Life")),
    ("non linked -general annuity business", ("Non-Linked", "", "Annuity")),
    ("non linked - pension business", ("Non-Linked", "", "Pension")),
    ("non linked health business", ("Non-Linked", "", "Health")),
    ("linked business - life business", ("Linked", "", "Life")),
    ("linked general annuity business", ("Linked", "", "Annuity")),
    ("linked pension business", ("Linked", "", "Pension")),
    ("linked health business", ("Linked", "", "Health")),
    ("non-linked vip-life business", ("Non-Linked", "VIP", "Life")),
    ("non-linked vip-general annuity business", ("Non-Linked", "VIP", "Annuity")),
    ("non-linked vip-pension business", ("Non-Linked", "VIP", "Pension")),
    ("non-linked vip-health business", ("Non-Linked", "VIP", "Health")),
    ("linked vip-life business", ("Linked", "VIP", "Life")),
    ("linked vip-general annuity business", ("Linked", "VIP", "Annuity")),
    ("linked vip-pension business", ("Linked", "VIP", "Pension")),
    ("linked vip-health business", ("Linked", "VIP", "Health")),
];

// ============================================================================
// AGGREGATE / SECTION EXCLUSIONS
// ============================================================================

/// Header labels whose column spans carry subtotals, never a single insurer.
/// Hitting one of these resets the carried insurer until a real name reappears.
pub const EXCLUDED_AGGREGATE_COLUMNS: &[&str] = &[
    "grand total",
    "private total",
    "private sector total",
    "public sector total",
    "total",
    "industry total",
];

/// Column header labels excluded in the business-in-force layouts, where the
/// leading column header reads "Particulars" rather than an insurer name.
pub const EXCLUDED_COLUMN_HEADERS: &[&str] = &[
    "particulars",
    "grand total",
    "private total",
    "private sector total",
    "public sector total",
    "total",
    "industry total",
];

/// Row labels that mark a sector section header or an aggregate row
pub const SECTION_ROW_LABELS: &[&str] = &[
    "public sector",
    "private sector",
    "total",
    "grand total",
    "industry total",
    "private total",
    "private sector total",
];

/// Row labels excluded from state-wise detail extraction
pub const EXCLUDED_STATE_ROWS: &[&str] = &[
    "total",
    "grand total",
    "all india",
    "s.no.",
    "private total",
    "private sector total",
    "public sector total",
];

// ============================================================================
// VALIDATION DOMAINS
// ============================================================================

pub const VALID_L1: &[&str] = &["", "Linked", "Non-Linked"];

pub const VALID_SEGMENTS: &[&str] = &["Individual", "Group", "Not Applicable"];
