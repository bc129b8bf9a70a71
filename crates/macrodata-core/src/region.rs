//! ASEAN member reference list.
//!
//! Served to clients for country pickers. It does not restrict the `country`
//! parameter; any code is forwarded to the upstream.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

pub static ASEAN_COUNTRIES: [Country; 10] = [
    Country { code: "BRN", name: "Brunei" },
    Country { code: "KHM", name: "Cambodia" },
    Country { code: "IDN", name: "Indonesia" },
    Country { code: "LAO", name: "Laos" },
    Country { code: "MYS", name: "Malaysia" },
    Country { code: "MMR", name: "Myanmar" },
    Country { code: "PHL", name: "Philippines" },
    Country { code: "SGP", name: "Singapore" },
    Country { code: "THA", name: "Thailand" },
    Country { code: "VNM", name: "Vietnam" },
];
