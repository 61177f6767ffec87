//! Copyright year to version lookup.
//!
//! Each release line bumped the copyright header of its bundled scripts,
//! so the year pins down a release family. The premium editions were
//! numbered separately from Community, hence two labels per row.

use crate::version_guess::UNKNOWN_VERSION;
use crate::Edition;

/// How a row matches the copyright token.
#[derive(Debug, Clone, Copy)]
enum YearKey {
    /// Token must equal this text exactly.
    Exact(&'static str),
    /// Token's leading digit run must equal this number once parsed,
    /// so `"2010-2012"` and `"02010"` both count as 2010.
    Numeric(u64),
}

impl YearKey {
    fn matches(&self, token: &str) -> bool {
        match self {
            Self::Exact(text) => token == *text,
            Self::Numeric(year) => {
                let digits = token
                    .find(|c: char| !c.is_ascii_digit())
                    .map_or(token, |end| &token[..end]);
                !digits.is_empty() && digits.parse::<u64>() == Ok(*year)
            }
        }
    }
}

/// Which editions get the premium label for a row.
#[derive(Debug, Clone, Copy)]
enum Premium {
    EnterpriseOnly,
    EnterpriseOrProfessional,
}

impl Premium {
    fn includes(&self, edition: Edition) -> bool {
        match self {
            Self::EnterpriseOnly => edition == Edition::Enterprise,
            Self::EnterpriseOrProfessional => {
                matches!(edition, Edition::Enterprise | Edition::Professional)
            }
        }
    }
}

struct Row {
    key: YearKey,
    premium: Premium,
    premium_version: &'static str,
    community_version: &'static str,
}

// Professional gets the premium label only on the 2010-2012 rows. The 2013
// and 2014 rows resolve it to the Community line.
const YEAR_TABLE: &[Row] = &[
    Row {
        key: YearKey::Exact("2006-2015"),
        premium: Premium::EnterpriseOnly,
        premium_version: "1.14",
        community_version: "1.9",
    },
    Row {
        key: YearKey::Exact("2006-2014"),
        premium: Premium::EnterpriseOnly,
        premium_version: "1.14",
        community_version: "1.9",
    },
    Row {
        key: YearKey::Exact("2014"),
        premium: Premium::EnterpriseOnly,
        premium_version: "1.14",
        community_version: "1.9",
    },
    Row {
        key: YearKey::Numeric(2013),
        premium: Premium::EnterpriseOnly,
        premium_version: "1.13",
        community_version: "1.8",
    },
    Row {
        key: YearKey::Numeric(2012),
        premium: Premium::EnterpriseOrProfessional,
        premium_version: "1.12",
        community_version: "1.7",
    },
    Row {
        key: YearKey::Numeric(2011),
        premium: Premium::EnterpriseOrProfessional,
        premium_version: "1.11",
        community_version: "1.6",
    },
    Row {
        key: YearKey::Numeric(2010),
        premium: Premium::EnterpriseOrProfessional,
        premium_version: "1.9 - 1.10",
        community_version: "1.4 - 1.5",
    },
];

/// Map a copyright token and edition to a version label.
///
/// Returns `"Unknown"` for tokens outside the table.
pub(crate) fn year_to_version(token: &str, edition: Edition) -> &'static str {
    YEAR_TABLE
        .iter()
        .find(|row| row.key.matches(token))
        .map(|row| {
            if row.premium.includes(edition) {
                row.premium_version
            } else {
                row.community_version
            }
        })
        .unwrap_or(UNKNOWN_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2014_family_enterprise_only() {
        for token in ["2006-2015", "2006-2014", "2014"] {
            assert_eq!(year_to_version(token, Edition::Enterprise), "1.14");
            assert_eq!(year_to_version(token, Edition::Professional), "1.9");
            assert_eq!(year_to_version(token, Edition::Community), "1.9");
        }
    }

    #[test]
    fn test_2013_enterprise_only() {
        assert_eq!(year_to_version("2013", Edition::Enterprise), "1.13");
        assert_eq!(year_to_version("2013", Edition::Professional), "1.8");
        assert_eq!(year_to_version("2013", Edition::Community), "1.8");
    }

    #[test]
    fn test_2012_to_2010_professional_is_premium() {
        assert_eq!(year_to_version("2012", Edition::Enterprise), "1.12");
        assert_eq!(year_to_version("2012", Edition::Professional), "1.12");
        assert_eq!(year_to_version("2012", Edition::Community), "1.7");

        assert_eq!(year_to_version("2011", Edition::Enterprise), "1.11");
        assert_eq!(year_to_version("2011", Edition::Professional), "1.11");
        assert_eq!(year_to_version("2011", Edition::Community), "1.6");

        assert_eq!(year_to_version("2010", Edition::Enterprise), "1.9 - 1.10");
        assert_eq!(year_to_version("2010", Edition::Professional), "1.9 - 1.10");
        assert_eq!(year_to_version("2010", Edition::Community), "1.4 - 1.5");
    }

    #[test]
    fn test_numeric_rows_coerce_leading_zeros() {
        assert_eq!(year_to_version("02012", Edition::Community), "1.7");
        assert_eq!(year_to_version("002013", Edition::Enterprise), "1.13");
    }

    #[test]
    fn test_string_rows_do_not_coerce() {
        assert_eq!(year_to_version("02014", Edition::Community), UNKNOWN_VERSION);
    }

    #[test]
    fn test_ranges_match_numeric_rows_by_leading_year() {
        assert_eq!(year_to_version("2010-2012", Edition::Community), "1.4 - 1.5");
        assert_eq!(year_to_version("2010-2012", Edition::Professional), "1.9 - 1.10");
        assert_eq!(year_to_version("2013-", Edition::Enterprise), "1.13");
        assert_eq!(year_to_version("2012-2013", Edition::Community), "1.7");
    }

    #[test]
    fn test_ranges_starting_outside_table() {
        assert_eq!(year_to_version("2006-2013", Edition::Enterprise), UNKNOWN_VERSION);
        assert_eq!(year_to_version("2014-2015", Edition::Community), UNKNOWN_VERSION);
        assert_eq!(year_to_version("-2012", Edition::Community), UNKNOWN_VERSION);
    }

    #[test]
    fn test_unknown_years() {
        for edition in Edition::all() {
            assert_eq!(year_to_version("1999", edition), UNKNOWN_VERSION);
            assert_eq!(year_to_version("2016", edition), UNKNOWN_VERSION);
            assert_eq!(year_to_version("----", edition), UNKNOWN_VERSION);
            assert_eq!(year_to_version("99999999999999999999999", edition), UNKNOWN_VERSION);
        }
    }
}
