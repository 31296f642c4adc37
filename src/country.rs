//! Country metadata backing the phone input's selector.

/// One selectable country. ISO codes are stored lowercase; the phone
/// input upper-cases the code when forwarding it to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub iso: &'static str,
    pub name: &'static str,
    pub dial: &'static str,
}

pub const DEFAULT_COUNTRY: &str = "in";

pub const COUNTRIES: &[Country] = &[
    Country { iso: "au", name: "Australia", dial: "61" },
    Country { iso: "br", name: "Brazil", dial: "55" },
    Country { iso: "ca", name: "Canada", dial: "1" },
    Country { iso: "cn", name: "China", dial: "86" },
    Country { iso: "de", name: "Germany", dial: "49" },
    Country { iso: "es", name: "Spain", dial: "34" },
    Country { iso: "fr", name: "France", dial: "33" },
    Country { iso: "gb", name: "United Kingdom", dial: "44" },
    Country { iso: "id", name: "Indonesia", dial: "62" },
    Country { iso: "in", name: "India", dial: "91" },
    Country { iso: "it", name: "Italy", dial: "39" },
    Country { iso: "jp", name: "Japan", dial: "81" },
    Country { iso: "ke", name: "Kenya", dial: "254" },
    Country { iso: "kr", name: "South Korea", dial: "82" },
    Country { iso: "mx", name: "Mexico", dial: "52" },
    Country { iso: "ng", name: "Nigeria", dial: "234" },
    Country { iso: "nl", name: "Netherlands", dial: "31" },
    Country { iso: "nz", name: "New Zealand", dial: "64" },
    Country { iso: "ph", name: "Philippines", dial: "63" },
    Country { iso: "pk", name: "Pakistan", dial: "92" },
    Country { iso: "ru", name: "Russia", dial: "7" },
    Country { iso: "sa", name: "Saudi Arabia", dial: "966" },
    Country { iso: "sg", name: "Singapore", dial: "65" },
    Country { iso: "tr", name: "Turkey", dial: "90" },
    Country { iso: "ua", name: "Ukraine", dial: "380" },
    Country { iso: "ae", name: "United Arab Emirates", dial: "971" },
    Country { iso: "us", name: "United States", dial: "1" },
    Country { iso: "vn", name: "Vietnam", dial: "84" },
    Country { iso: "za", name: "South Africa", dial: "27" },
];

pub fn lookup(iso: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.iso.eq_ignore_ascii_case(iso))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_country_exists() {
        let c = lookup(DEFAULT_COUNTRY).unwrap();
        assert_eq!(c.name, "India");
        assert_eq!(c.dial, "91");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("GB").unwrap().name, "United Kingdom");
        assert_eq!(lookup("gB").unwrap().name, "United Kingdom");
    }

    #[test]
    fn unknown_code_is_none() {
        assert!(lookup("zz").is_none());
        assert!(lookup("").is_none());
    }
}
