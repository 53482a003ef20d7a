//! Identifiers and content shared by occurrences and series

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Defines a numeric identifier type, as assigned by the storage layer
macro_rules! synthetise_id_type {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().trim_start_matches('#').parse()?))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
                write!(f, "{}#{}", $prefix, self.0)
            }
        }
    }
}

synthetise_id_type!(
    /// Identifies a stored [`Occurrence`](crate::Occurrence)
    OccurrenceId, "Event"
);
synthetise_id_type!(
    /// Identifies a stored [`Series`](crate::Series)
    SeriesId, "Event Series"
);
synthetise_id_type!(
    /// Identifies a user account (a submitter or a moderator)
    UserId, "User"
);
synthetise_id_type!(
    /// Identifies an event category
    CategoryId, "Category"
);


/// Where an event takes place
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The venue name, e.g. "Be Here Now"
    pub name: String,
    pub address: String,
    /// e.g. "upstairs", "room 101"
    pub details: String,
}

impl Location {
    pub fn new<S: ToString>(name: S) -> Self {
        Self { name: name.to_string(), ..Self::default() }
    }

    pub fn with_address<S: ToString>(mut self, address: S) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn with_details<S: ToString>(mut self, details: S) -> Self {
        self.details = details.to_string();
        self
    }
}

/// Everything a submitter describes about an event, except its dates
///
/// Every occurrence of a series carries the same content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContent {
    pub title: String,
    pub description: String,
    pub category_id: CategoryId,
    pub location: Location,
    pub cost: Option<String>,
    pub age_restriction: Option<String>,
    /// Where the information comes from (a website, a poster...)
    pub source: Option<String>,
}

impl Default for CategoryId {
    fn default() -> Self {
        Self(0)
    }
}

impl EventContent {
    pub fn new<S: ToString, T: ToString>(title: S, description: T, category_id: CategoryId, location: Location) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category_id,
            location,
            cost: None,
            age_restriction: None,
            source: None,
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ids() {
        let id = OccurrenceId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "Event#42");
        assert_eq!(SeriesId::from(3).to_string(), "Event Series#3");
        assert_eq!("#7".parse::<UserId>().unwrap(), UserId::new(7));
        assert!("seven".parse::<CategoryId>().is_err());

        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(serde_json::from_str::<OccurrenceId>("42").unwrap(), id);
    }

    #[test]
    fn test_location_builder() {
        let loc = Location::new("Be Here Now")
            .with_address("505 N. Dill St.")
            .with_details("backstage");
        assert_eq!(loc.name, "Be Here Now");
        assert_eq!(loc.address, "505 N. Dill St.");
        assert_eq!(loc.details, "backstage");
    }
}
