//! Label rows for every supported code table.

/// ISO 5218.
pub const SEX: &[(&str, &str)] = &[
    ("Male", "1"),
    ("M", "1"),
    ("Female", "2"),
    ("F", "2"),
    ("Unknown", "0"),
    ("U", "0"),
    ("Not applicable", "9"),
];

/// E.i.7 outcome of reaction at the time of last observation.
pub const OUTCOME: &[(&str, &str)] = &[
    ("Recovered", "1"),
    ("Resolved", "1"),
    ("Recovered/Resolved", "1"),
    ("Recovering", "2"),
    ("Resolving", "2"),
    ("Recovering/Resolving", "2"),
    ("Not recovered", "3"),
    ("Not resolved", "3"),
    ("Not recovered/Not resolved", "3"),
    ("Ongoing", "3"),
    ("Recovered with sequelae", "4"),
    ("Resolved with sequelae", "4"),
    ("Fatal", "5"),
    ("Death", "5"),
    ("Unknown", "0"),
];

/// E.i.3.2 seriousness criteria, as ICH observation codes.
pub const SERIOUSNESS: &[(&str, &str)] = &[
    ("Death", "34"),
    ("Results in death", "34"),
    ("Life-threatening", "21"),
    ("Life threatening", "21"),
    ("Hospitalization", "33"),
    ("Hospitalisation", "33"),
    ("Caused or prolonged hospitalisation", "33"),
    ("Disability", "35"),
    ("Disabling/Incapacitating", "35"),
    ("Congenital anomaly", "12"),
    ("Congenital anomaly/Birth defect", "12"),
    ("Other serious", "26"),
    ("Other medically important condition", "26"),
];

/// G.k.8 action taken with drug.
pub const ACTION_TAKEN: &[(&str, &str)] = &[
    ("Drug withdrawn", "1"),
    ("Withdrawn", "1"),
    ("Dose reduced", "2"),
    ("Dose increased", "3"),
    ("Dose not changed", "4"),
    ("Unknown", "0"),
    ("Not applicable", "9"),
];

/// Dechallenge and rechallenge results share one code list.
pub const CHALLENGE: &[(&str, &str)] = &[
    ("Positive", "1"),
    ("Yes", "1"),
    ("Negative", "2"),
    ("No", "2"),
    ("Unknown", "3"),
    ("Not applicable", "4"),
    ("Not done", "4"),
];

/// C.2.r.4 reporter qualification.
pub const QUALIFICATION: &[(&str, &str)] = &[
    ("Physician", "1"),
    ("Doctor", "1"),
    ("Pharmacist", "2"),
    ("Other health professional", "3"),
    ("Nurse", "3"),
    ("Lawyer", "4"),
    ("Consumer", "5"),
    ("Patient", "5"),
    ("Consumer or other non health professional", "5"),
];

/// C.3.1 sender type.
pub const SENDER_TYPE: &[(&str, &str)] = &[
    ("Pharmaceutical company", "1"),
    ("Regulatory authority", "2"),
    ("Health professional", "3"),
    ("Regional pharmacovigilance centre", "4"),
    ("WHO collaborating centre", "5"),
    ("Other", "6"),
    ("Patient", "7"),
    ("Consumer", "7"),
];

/// G.k.1 characterisation of drug role.
pub const DRUG_ROLE: &[(&str, &str)] = &[
    ("Suspect", "1"),
    ("Concomitant", "2"),
    ("Interacting", "3"),
    ("Drug not administered", "4"),
];

/// C.1.3 type of report.
pub const REPORT_TYPE: &[(&str, &str)] = &[
    ("Spontaneous", "1"),
    ("Spontaneous report", "1"),
    ("Study", "2"),
    ("Report from study", "2"),
    ("Clinical trial", "2"),
    ("Other", "3"),
    ("Not available", "4"),
    ("Not available to sender", "4"),
];

/// G.k.4.r.10 route of administration (E2B route codes).
pub const ROUTE: &[(&str, &str)] = &[
    ("Cutaneous", "003"),
    ("Intramuscular", "030"),
    ("IM", "030"),
    ("Intravenous", "042"),
    ("IV", "042"),
    ("Oral", "048"),
    ("PO", "048"),
    ("Other", "050"),
    ("Rectal", "054"),
    ("Inhalation", "055"),
    ("Respiratory (inhalation)", "055"),
    ("Subcutaneous", "058"),
    ("SC", "058"),
    ("Topical", "061"),
    ("Transdermal", "062"),
    ("Unknown", "065"),
];

/// UCUM units for D.2.2 age at onset.
pub const AGE_UNIT: &[(&str, &str)] = &[
    ("Years", "a"),
    ("Year", "a"),
    ("Months", "mo"),
    ("Month", "mo"),
    ("Weeks", "wk"),
    ("Week", "wk"),
    ("Days", "d"),
    ("Day", "d"),
    ("Hours", "h"),
    ("Hour", "h"),
    ("Decades", "10.a"),
    ("Decade", "10.a"),
];

/// ISO 3166-1 alpha-2 for the countries the intake forms offer.
pub const COUNTRY: &[(&str, &str)] = &[
    ("United States", "US"),
    ("United States of America", "US"),
    ("USA", "US"),
    ("United Kingdom", "GB"),
    ("UK", "GB"),
    ("Great Britain", "GB"),
    ("Germany", "DE"),
    ("France", "FR"),
    ("Italy", "IT"),
    ("Spain", "ES"),
    ("Netherlands", "NL"),
    ("Belgium", "BE"),
    ("Switzerland", "CH"),
    ("Austria", "AT"),
    ("Sweden", "SE"),
    ("Norway", "NO"),
    ("Denmark", "DK"),
    ("Finland", "FI"),
    ("Ireland", "IE"),
    ("Portugal", "PT"),
    ("Poland", "PL"),
    ("Czech Republic", "CZ"),
    ("Czechia", "CZ"),
    ("Greece", "GR"),
    ("Hungary", "HU"),
    ("Romania", "RO"),
    ("Canada", "CA"),
    ("Mexico", "MX"),
    ("Brazil", "BR"),
    ("Argentina", "AR"),
    ("Australia", "AU"),
    ("New Zealand", "NZ"),
    ("Japan", "JP"),
    ("China", "CN"),
    ("India", "IN"),
    ("South Korea", "KR"),
    ("Republic of Korea", "KR"),
    ("Singapore", "SG"),
    ("South Africa", "ZA"),
    ("Nigeria", "NG"),
    ("Kenya", "KE"),
    ("Egypt", "EG"),
    ("Israel", "IL"),
    ("Turkey", "TR"),
    ("Türkiye", "TR"),
    ("Russia", "RU"),
    ("Russian Federation", "RU"),
    ("Saudi Arabia", "SA"),
    ("United Arab Emirates", "AE"),
];

/// Dose frequencies with a fixed interval: `(label, period value, UCUM unit)`.
pub const FREQUENCY: &[(&str, &str, &str)] = &[
    ("Once daily", "1", "d"),
    ("Daily", "1", "d"),
    ("QD", "1", "d"),
    ("Twice daily", "12", "h"),
    ("BID", "12", "h"),
    ("Three times daily", "8", "h"),
    ("TID", "8", "h"),
    ("Four times daily", "6", "h"),
    ("QID", "6", "h"),
    ("Every other day", "2", "d"),
    ("Weekly", "1", "wk"),
    ("Once weekly", "1", "wk"),
    ("Monthly", "1", "mo"),
    ("Once monthly", "1", "mo"),
];
