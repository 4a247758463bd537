use std::fmt;
use std::str::FromStr;

use skies_types::records::{Area, Bargain, Event, Exchange, Persona, Prospect, Quality, Setting};
use skies_types::{Record, RecordSchema, RecordType};

use crate::error::LoadError;

/// File extension of every backing source.
pub const DEFAULT_EXTENSION: &str = "dat";

/// The fixed, closed set of datasets shipped with the game.
///
/// ```text
/// ┌───────────┬───────────────┬──────────────────────────────┐
/// │ Kind      │ File          │ Content                      │
/// ├───────────┼───────────────┼──────────────────────────────┤
/// │ Areas     │ areas.dat     │ raw array of Area            │
/// │ Backers   │ backers.dat   │ CRLF-separated text lines    │
/// │ Bargains  │ bargains.dat  │ raw array of Bargain         │
/// │ Events    │ events.dat    │ raw array of Event           │
/// │ Exchanges │ exchanges.dat │ raw array of Exchange        │
/// │ Personas  │ personas.dat  │ raw array of Persona         │
/// │ Prospects │ prospects.dat │ raw array of Prospect        │
/// │ Qualities │ qualities.dat │ raw array of Quality         │
/// │ Settings  │ settings.dat  │ raw array of Setting         │
/// └───────────┴───────────────┴──────────────────────────────┘
/// ```
///
/// Declaration order is catalog order: [`ALL`](Self::ALL), `Ord` and
/// therefore [`GameData`](crate::GameData) iteration all follow it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatasetKind {
    Areas,
    Backers,
    Bargains,
    Events,
    Exchanges,
    Personas,
    Prospects,
    Qualities,
    Settings,
}

impl DatasetKind {
    pub const ALL: [Self; 9] = [
        Self::Areas,
        Self::Backers,
        Self::Bargains,
        Self::Events,
        Self::Exchanges,
        Self::Personas,
        Self::Prospects,
        Self::Qualities,
        Self::Settings,
    ];

    /// The dataset name callers use, which is also the file stem.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Areas => "areas",
            Self::Backers => "backers",
            Self::Bargains => "bargains",
            Self::Events => "events",
            Self::Exchanges => "exchanges",
            Self::Personas => "personas",
            Self::Prospects => "prospects",
            Self::Qualities => "qualities",
            Self::Settings => "settings",
        }
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Conventional file name, `<name>.dat`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.{DEFAULT_EXTENSION}", self.name())
    }

    /// Layout of the dataset's element type. `None` for the text list.
    #[must_use]
    pub fn record_schema(self) -> Option<&'static RecordSchema> {
        match self {
            Self::Areas => Some(Area::SCHEMA),
            Self::Backers => None,
            Self::Bargains => Some(Bargain::SCHEMA),
            Self::Events => Some(Event::SCHEMA),
            Self::Exchanges => Some(Exchange::SCHEMA),
            Self::Personas => Some(Persona::SCHEMA),
            Self::Prospects => Some(Prospect::SCHEMA),
            Self::Qualities => Some(Quality::SCHEMA),
            Self::Settings => Some(Setting::SCHEMA),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LoadError::UnknownDataset { name: s.to_owned() })
    }
}

/// The decoded contents of one dataset.
///
/// Record datasets keep the raw array exactly as decoded, absent
/// elements included, so indices line up with the source file.
#[derive(Clone, Debug, PartialEq)]
pub enum Dataset {
    Areas(Vec<Option<Area>>),
    Backers(Vec<String>),
    Bargains(Vec<Option<Bargain>>),
    Events(Vec<Option<Event>>),
    Exchanges(Vec<Option<Exchange>>),
    Personas(Vec<Option<Persona>>),
    Prospects(Vec<Option<Prospect>>),
    Qualities(Vec<Option<Quality>>),
    Settings(Vec<Option<Setting>>),
}

impl Dataset {
    #[must_use]
    pub fn kind(&self) -> DatasetKind {
        match self {
            Self::Areas(_) => DatasetKind::Areas,
            Self::Backers(_) => DatasetKind::Backers,
            Self::Bargains(_) => DatasetKind::Bargains,
            Self::Events(_) => DatasetKind::Events,
            Self::Exchanges(_) => DatasetKind::Exchanges,
            Self::Personas(_) => DatasetKind::Personas,
            Self::Prospects(_) => DatasetKind::Prospects,
            Self::Qualities(_) => DatasetKind::Qualities,
            Self::Settings(_) => DatasetKind::Settings,
        }
    }

    /// Number of entries, absent elements included.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Backers(lines) => lines.len(),
            Self::Areas(v) => v.len(),
            Self::Bargains(v) => v.len(),
            Self::Events(v) => v.len(),
            Self::Exchanges(v) => v.len(),
            Self::Personas(v) => v.len(),
            Self::Prospects(v) => v.len(),
            Self::Qualities(v) => v.len(),
            Self::Settings(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Type-erased view of a record dataset. `None` for the text list.
    #[must_use]
    pub fn records(&self) -> Option<Vec<Option<&dyn Record>>> {
        Some(match self {
            Self::Backers(_) => return None,
            Self::Areas(v) => erase(v),
            Self::Bargains(v) => erase(v),
            Self::Events(v) => erase(v),
            Self::Exchanges(v) => erase(v),
            Self::Personas(v) => erase(v),
            Self::Prospects(v) => erase(v),
            Self::Qualities(v) => erase(v),
            Self::Settings(v) => erase(v),
        })
    }

    /// The text lines of the backers list. `None` for record datasets.
    #[must_use]
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            Self::Backers(lines) => Some(lines),
            _ => None,
        }
    }
}

fn erase<R: Record>(items: &[Option<R>]) -> Vec<Option<&dyn Record>> {
    items
        .iter()
        .map(|item| item.as_ref().map(|r| r as &dyn Record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for kind in DatasetKind::ALL {
            assert_eq!(DatasetKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.name().parse::<DatasetKind>().unwrap(), kind);
        }
    }

    #[test]
    fn catalog_order_is_sorted() {
        let mut sorted = DatasetKind::ALL;
        sorted.sort();
        assert_eq!(sorted, DatasetKind::ALL);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "Qualities".parse::<DatasetKind>().unwrap_err();
        assert!(matches!(err, LoadError::UnknownDataset { ref name } if name == "Qualities"));
        assert!(DatasetKind::from_name("users").is_none());
    }

    #[test]
    fn file_names_follow_convention() {
        assert_eq!(DatasetKind::Qualities.file_name(), "qualities.dat");
        assert_eq!(DatasetKind::Backers.to_string(), "backers");
    }

    #[test]
    fn only_backers_lacks_a_schema() {
        for kind in DatasetKind::ALL {
            assert_eq!(kind.record_schema().is_none(), kind == DatasetKind::Backers);
        }
        assert_eq!(DatasetKind::Events.record_schema().unwrap().name, "Event");
    }

    #[test]
    fn erased_view_keeps_absent_elements() {
        let dataset = Dataset::Areas(vec![Some(Area::default()), None]);
        let records = dataset.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].unwrap().type_name(), "Area");
        assert!(records[1].is_none());
        assert!(dataset.lines().is_none());
        assert_eq!(dataset.kind(), DatasetKind::Areas);
    }
}
