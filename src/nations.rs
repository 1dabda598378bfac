//! Nationality code tables.
//!
//! Three distinct directions, and they are not symmetric: free-text/IOC
//! input normalizes to ISO 3166-1 alpha-3 for internal use, the flag
//! assets on disk are named after the IOC form (`ger.png`, never
//! `deu.png`), and the display code shown next to the flag is the IOC
//! form again. A fixed set of codes diverges between the two systems;
//! everything else is identical up to case.

use crate::labels::Locale;

/// Normalize free-text/IOC/ISO-2 input to an ISO 3166-1 alpha-3 code.
///
/// Falls back to the first three letters of the uppercased input; empty
/// input yields `None`.
pub fn iso3(raw: &str) -> Option<String> {
    let code = raw.trim().to_ascii_uppercase();
    if code.is_empty() {
        return None;
    }
    let mapped = match code.as_str() {
        // IOC codes that differ from ISO.
        "GER" => "DEU",
        "NED" => "NLD",
        "SUI" => "CHE",
        "DEN" => "DNK",
        "CRO" => "HRV",
        "GRE" => "GRC",
        "BUL" => "BGR",
        "RSA" => "ZAF",
        "POR" => "PRT",
        "LAT" => "LVA",
        "UAE" => "ARE",
        "CHI" => "CHL",
        "URU" => "URY",
        "SLO" => "SVN",
        "MAS" => "MYS",
        // ISO 3166-1 alpha-2 codes that show up in older data.
        "GB" => "GBR",
        "DE" => "DEU",
        "NL" => "NLD",
        "CH" => "CHE",
        "DK" => "DNK",
        "AT" => "AUT",
        "BE" => "BEL",
        "FR" => "FRA",
        "IT" => "ITA",
        "ES" => "ESP",
        "SE" => "SWE",
        "NO" => "NOR",
        "PL" => "POL",
        "CZ" => "CZE",
        "HU" => "HUN",
        "RO" => "ROU",
        "IE" => "IRL",
        "PT" => "PRT",
        _ => "",
    };
    if !mapped.is_empty() {
        return Some(mapped.to_string());
    }
    if code.len() >= 3 {
        Some(code.chars().take(3).collect())
    } else {
        Some(code)
    }
}

/// The file-name stem of the flag asset for an ISO-3 code.
///
/// Flags are named after the lowercase IOC form, so the divergent codes
/// map back before lowercasing.
pub fn flag_code(iso3: &str) -> String {
    display_code(iso3).to_ascii_lowercase()
}

/// The IOC display form of an ISO-3 code (`DEU` → `GER`).
pub fn display_code(iso3: &str) -> String {
    match iso3.to_ascii_uppercase().as_str() {
        "DEU" => "GER".to_string(),
        "NLD" => "NED".to_string(),
        "CHE" => "SUI".to_string(),
        "DNK" => "DEN".to_string(),
        "HRV" => "CRO".to_string(),
        "GRC" => "GRE".to_string(),
        "BGR" => "BUL".to_string(),
        "ZAF" => "RSA".to_string(),
        "PRT" => "POR".to_string(),
        "LVA" => "LAT".to_string(),
        "ARE" => "UAE".to_string(),
        "CHL" => "CHI".to_string(),
        "URY" => "URU".to_string(),
        "SVN" => "SLO".to_string(),
        "MYS" => "MAS".to_string(),
        other => other.to_string(),
    }
}

/// Full country name for a raw IOC code; unknown codes pass through.
pub fn country_name(ioc: &str, locale: Locale) -> String {
    let code = ioc.trim().to_ascii_uppercase();
    match names(&code) {
        Some((de, en)) => match locale {
            Locale::German => de.to_string(),
            Locale::English => en.to_string(),
        },
        None if code.is_empty() => String::new(),
        None => ioc.trim().to_string(),
    }
}

/// (German, English) country names keyed by IOC code.
#[allow(clippy::too_many_lines)]
fn names(code: &str) -> Option<(&'static str, &'static str)> {
    let pair = match code {
        "AFG" => ("Afghanistan", "Afghanistan"),
        "AIA" => ("Anguilla", "Anguilla"),
        "ALB" => ("Albanien", "Albania"),
        "ALG" => ("Algerien", "Algeria"),
        "AND" => ("Andorra", "Andorra"),
        "ANG" => ("Angola", "Angola"),
        "ANT" => ("Antigua und Barbuda", "Antigua and Barbuda"),
        "ARG" => ("Argentinien", "Argentina"),
        "ARM" => ("Armenien", "Armenia"),
        "ARU" => ("Aruba", "Aruba"),
        "ASA" => ("Amerikanisch-Samoa", "American Samoa"),
        "AUS" => ("Australien", "Australia"),
        "AUT" => ("Österreich", "Austria"),
        "AZE" => ("Aserbaidschan", "Azerbaijan"),
        "BAH" => ("Bahamas", "Bahamas"),
        "BAN" => ("Bangladesch", "Bangladesh"),
        "BAR" => ("Barbados", "Barbados"),
        "BDI" => ("Burundi", "Burundi"),
        "BEL" => ("Belgien", "Belgium"),
        "BEN" => ("Benin", "Benin"),
        "BER" => ("Bermuda", "Bermuda"),
        "BHU" => ("Bhutan", "Bhutan"),
        "BIH" => ("Bosnien und Herzegowina", "Bosnia and Herzegovina"),
        "BIZ" => ("Belize", "Belize"),
        "BLR" => ("Belarus", "Belarus"),
        "BOL" => ("Bolivien", "Bolivia"),
        "BOT" => ("Botswana", "Botswana"),
        "BRA" => ("Brasilien", "Brazil"),
        "BRN" => ("Bahrain", "Bahrain"),
        "BRU" => ("Brunei", "Brunei"),
        "BUL" => ("Bulgarien", "Bulgaria"),
        "BUR" => ("Burkina Faso", "Burkina Faso"),
        "CAF" => ("Zentralafrikanische Republik", "Central African Republic"),
        "CAM" => ("Kambodscha", "Cambodia"),
        "CAN" => ("Kanada", "Canada"),
        "CAY" => ("Kaimaninseln", "Cayman Islands"),
        "CGO" => ("Kongo", "Congo"),
        "CHA" => ("Tschad", "Chad"),
        "CHI" => ("Chile", "Chile"),
        "CHN" => ("China", "China"),
        "CIV" => ("Elfenbeinküste", "Ivory Coast"),
        "CMR" => ("Kamerun", "Cameroon"),
        "COD" => ("DR Kongo", "DR Congo"),
        "COK" => ("Cookinseln", "Cook Islands"),
        "COL" => ("Kolumbien", "Colombia"),
        "COM" => ("Komoren", "Comoros"),
        "CPV" => ("Kap Verde", "Cape Verde"),
        "CRC" => ("Costa Rica", "Costa Rica"),
        "CRO" => ("Kroatien", "Croatia"),
        "CUB" => ("Kuba", "Cuba"),
        "CYP" => ("Zypern", "Cyprus"),
        "CZE" => ("Tschechien", "Czechia"),
        "DEN" => ("Dänemark", "Denmark"),
        "DJI" => ("Dschibuti", "Djibouti"),
        "DMA" => ("Dominica", "Dominica"),
        "DOM" => ("Dominikanische Republik", "Dominican Republic"),
        "ECU" => ("Ecuador", "Ecuador"),
        "EGY" => ("Ägypten", "Egypt"),
        "ERI" => ("Eritrea", "Eritrea"),
        "ESA" => ("El Salvador", "El Salvador"),
        "ESP" => ("Spanien", "Spain"),
        "EST" => ("Estland", "Estonia"),
        "ETH" => ("Äthiopien", "Ethiopia"),
        "FAR" => ("Färöer", "Faroe Islands"),
        "FIJ" => ("Fidschi", "Fiji"),
        "FIN" => ("Finnland", "Finland"),
        "FRA" => ("Frankreich", "France"),
        "FSM" => ("Mikronesien", "Micronesia"),
        "GAB" => ("Gabun", "Gabon"),
        "GAM" => ("Gambia", "Gambia"),
        "GBR" => ("Großbritannien", "Great Britain"),
        "GBS" => ("Guinea-Bissau", "Guinea-Bissau"),
        "GEO" => ("Georgien", "Georgia"),
        "GEQ" => ("Äquatorialguinea", "Equatorial Guinea"),
        "GER" => ("Deutschland", "Germany"),
        "GHA" => ("Ghana", "Ghana"),
        "GRE" => ("Griechenland", "Greece"),
        "GRN" => ("Grenada", "Grenada"),
        "GUA" => ("Guatemala", "Guatemala"),
        "GUI" => ("Guinea", "Guinea"),
        "GUM" => ("Guam", "Guam"),
        "GUY" => ("Guyana", "Guyana"),
        "HAI" => ("Haiti", "Haiti"),
        "HKG" => ("Hongkong", "Hong Kong"),
        "HON" => ("Honduras", "Honduras"),
        "HUN" => ("Ungarn", "Hungary"),
        "INA" => ("Indonesien", "Indonesia"),
        "IND" => ("Indien", "India"),
        "IRI" => ("Iran", "Iran"),
        "IRL" => ("Irland", "Ireland"),
        "IRQ" => ("Irak", "Iraq"),
        "ISL" => ("Island", "Iceland"),
        "ISR" => ("Israel", "Israel"),
        "ISV" => ("Amerikanische Jungferninseln", "US Virgin Islands"),
        "ITA" => ("Italien", "Italy"),
        "IVB" => ("Britische Jungferninseln", "British Virgin Islands"),
        "JAM" => ("Jamaika", "Jamaica"),
        "JOR" => ("Jordanien", "Jordan"),
        "JPN" => ("Japan", "Japan"),
        "KAZ" => ("Kasachstan", "Kazakhstan"),
        "KEN" => ("Kenia", "Kenya"),
        "KGZ" => ("Kirgisistan", "Kyrgyzstan"),
        "KIR" => ("Kiribati", "Kiribati"),
        "KOR" => ("Südkorea", "South Korea"),
        "KOS" => ("Kosovo", "Kosovo"),
        "KSA" => ("Saudi-Arabien", "Saudi Arabia"),
        "KUW" => ("Kuwait", "Kuwait"),
        "LAO" => ("Laos", "Laos"),
        "LAT" => ("Lettland", "Latvia"),
        "LBA" => ("Libyen", "Libya"),
        "LBN" => ("Libanon", "Lebanon"),
        "LBR" => ("Liberia", "Liberia"),
        "LCA" => ("St. Lucia", "St. Lucia"),
        "LES" => ("Lesotho", "Lesotho"),
        "LIE" => ("Liechtenstein", "Liechtenstein"),
        "LTU" => ("Litauen", "Lithuania"),
        "LUX" => ("Luxemburg", "Luxembourg"),
        "MAC" => ("Macau", "Macau"),
        "MAD" => ("Madagaskar", "Madagascar"),
        "MAR" => ("Marokko", "Morocco"),
        "MAS" => ("Malaysia", "Malaysia"),
        "MAW" => ("Malawi", "Malawi"),
        "MDA" => ("Moldau", "Moldova"),
        "MDV" => ("Malediven", "Maldives"),
        "MEX" => ("Mexiko", "Mexico"),
        "MGL" => ("Mongolei", "Mongolia"),
        "MHL" => ("Marshallinseln", "Marshall Islands"),
        "MKD" => ("Nordmazedonien", "North Macedonia"),
        "MLI" => ("Mali", "Mali"),
        "MLT" => ("Malta", "Malta"),
        "MNE" => ("Montenegro", "Montenegro"),
        "MON" => ("Monaco", "Monaco"),
        "MOZ" => ("Mosambik", "Mozambique"),
        "MRI" => ("Mauritius", "Mauritius"),
        "MTN" => ("Mauretanien", "Mauritania"),
        "MYA" => ("Myanmar", "Myanmar"),
        "NAM" => ("Namibia", "Namibia"),
        "NCA" => ("Nicaragua", "Nicaragua"),
        "NED" => ("Niederlande", "Netherlands"),
        "NEP" => ("Nepal", "Nepal"),
        "NGR" => ("Nigeria", "Nigeria"),
        "NIG" => ("Niger", "Niger"),
        "NOR" => ("Norwegen", "Norway"),
        "NRU" => ("Nauru", "Nauru"),
        "NZL" => ("Neuseeland", "New Zealand"),
        "OMA" => ("Oman", "Oman"),
        "PAK" => ("Pakistan", "Pakistan"),
        "PAN" => ("Panama", "Panama"),
        "PAR" => ("Paraguay", "Paraguay"),
        "PER" => ("Peru", "Peru"),
        "PHI" => ("Philippinen", "Philippines"),
        "PLE" => ("Palästina", "Palestine"),
        "PLW" => ("Palau", "Palau"),
        "PNG" => ("Papua-Neuguinea", "Papua New Guinea"),
        "POL" => ("Polen", "Poland"),
        "POR" => ("Portugal", "Portugal"),
        "PRK" => ("Nordkorea", "North Korea"),
        "PUR" => ("Puerto Rico", "Puerto Rico"),
        "QAT" => ("Katar", "Qatar"),
        "ROU" => ("Rumänien", "Romania"),
        "RSA" => ("Südafrika", "South Africa"),
        "RUS" => ("Russland", "Russia"),
        "RWA" => ("Ruanda", "Rwanda"),
        "SAM" => ("Samoa", "Samoa"),
        "SEN" => ("Senegal", "Senegal"),
        "SEY" => ("Seychellen", "Seychelles"),
        "SGP" => ("Singapur", "Singapore"),
        "SKN" => ("St. Kitts und Nevis", "St. Kitts and Nevis"),
        "SLE" => ("Sierra Leone", "Sierra Leone"),
        "SLO" => ("Slowenien", "Slovenia"),
        "SMR" => ("San Marino", "San Marino"),
        "SOL" => ("Salomonen", "Solomon Islands"),
        "SOM" => ("Somalia", "Somalia"),
        "SRB" => ("Serbien", "Serbia"),
        "SRI" => ("Sri Lanka", "Sri Lanka"),
        "SSD" => ("Südsudan", "South Sudan"),
        "STP" => ("São Tomé und Príncipe", "São Tomé and Príncipe"),
        "SUD" => ("Sudan", "Sudan"),
        "SUI" => ("Schweiz", "Switzerland"),
        "SUR" => ("Suriname", "Suriname"),
        "SVK" => ("Slowakei", "Slovakia"),
        "SWE" => ("Schweden", "Sweden"),
        "SWZ" => ("Eswatini", "Eswatini"),
        "SYR" => ("Syrien", "Syria"),
        "TAN" => ("Tansania", "Tanzania"),
        "TCA" => ("Turks- und Caicosinseln", "Turks and Caicos Islands"),
        "TGA" => ("Tonga", "Tonga"),
        "THA" => ("Thailand", "Thailand"),
        "TJK" => ("Tadschikistan", "Tajikistan"),
        "TKM" => ("Turkmenistan", "Turkmenistan"),
        "TLS" => ("Timor-Leste", "Timor-Leste"),
        "TOG" => ("Togo", "Togo"),
        "TPE" => ("Taiwan", "Taiwan"),
        "TTO" => ("Trinidad und Tobago", "Trinidad and Tobago"),
        "TUN" => ("Tunesien", "Tunisia"),
        "TUR" => ("Türkei", "Türkiye"),
        "TUV" => ("Tuvalu", "Tuvalu"),
        "UAE" => ("Vereinigte Arabische Emirate", "United Arab Emirates"),
        "UGA" => ("Uganda", "Uganda"),
        "UKR" => ("Ukraine", "Ukraine"),
        "URU" => ("Uruguay", "Uruguay"),
        "USA" => ("USA", "USA"),
        "UZB" => ("Usbekistan", "Uzbekistan"),
        "VAN" => ("Vanuatu", "Vanuatu"),
        "VEN" => ("Venezuela", "Venezuela"),
        "VIE" => ("Vietnam", "Vietnam"),
        "VIN" => ("St. Vincent und die Grenadinen", "St. Vincent and the Grenadines"),
        "YEM" => ("Jemen", "Yemen"),
        "ZAM" => ("Sambia", "Zambia"),
        "ZIM" => ("Simbabwe", "Zimbabwe"),
        // ISO-2 codes kept for older data.
        "GB" => ("Großbritannien", "Great Britain"),
        "DE" => ("Deutschland", "Germany"),
        "NL" => ("Niederlande", "Netherlands"),
        "CH" => ("Schweiz", "Switzerland"),
        "DK" => ("Dänemark", "Denmark"),
        "AT" => ("Österreich", "Austria"),
        "BE" => ("Belgien", "Belgium"),
        "FR" => ("Frankreich", "France"),
        "IT" => ("Italien", "Italy"),
        "ES" => ("Spanien", "Spain"),
        "SE" => ("Schweden", "Sweden"),
        "NO" => ("Norwegen", "Norway"),
        "PL" => ("Polen", "Poland"),
        "CZ" => ("Tschechien", "Czechia"),
        "HU" => ("Ungarn", "Hungary"),
        "RO" => ("Rumänien", "Romania"),
        "IE" => ("Irland", "Ireland"),
        "PT" => ("Portugal", "Portugal"),
        _ => return None,
    };
    Some(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ioc_input_normalizes_to_iso3() {
        assert_eq!(iso3("GER").as_deref(), Some("DEU"));
        assert_eq!(iso3("ned").as_deref(), Some("NLD"));
        assert_eq!(iso3("DE").as_deref(), Some("DEU"));
        assert_eq!(iso3("FRA").as_deref(), Some("FRA"));
    }

    #[test]
    fn unknown_input_truncates_to_three_letters() {
        assert_eq!(iso3("Germany").as_deref(), Some("GER"));
        assert_eq!(iso3("XY").as_deref(), Some("XY"));
        assert_eq!(iso3("  "), None);
    }

    #[test]
    fn flag_codes_use_the_ioc_form() {
        // Flag assets are named ger.png, not deu.png.
        assert_eq!(flag_code("DEU"), "ger");
        assert_eq!(flag_code("CHE"), "sui");
        assert_eq!(flag_code("FRA"), "fra");
    }

    #[test]
    fn display_codes_round_trip_divergent_pairs() {
        assert_eq!(display_code("DEU"), "GER");
        assert_eq!(display_code("GBR"), "GBR");
        assert_eq!(display_code("zaf"), "RSA");
    }

    #[test]
    fn country_names_follow_the_locale() {
        assert_eq!(country_name("GER", Locale::German), "Deutschland");
        assert_eq!(country_name("GER", Locale::English), "Germany");
        assert_eq!(country_name("SUI", Locale::German), "Schweiz");
        assert_eq!(country_name("XXZ", Locale::German), "XXZ");
        assert_eq!(country_name("", Locale::German), "");
    }
}
