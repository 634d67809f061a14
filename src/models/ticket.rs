//! Ticket records and priority ranking.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Discrete ticket priority, as labelled by the ticketing system.
///
/// # Examples
///
/// ```
/// use u_geocluster::models::Priority;
///
/// assert_eq!(Priority::parse("Critical"), Some(Priority::Critical));
/// assert_eq!(Priority::Critical.rank(), 4);
/// assert_eq!(Priority::rank_of(Some("Blocker")), 1);
/// assert_eq!(Priority::rank_of(None), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Seed rank: higher values seed clusters first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Parses an exact priority label. Labels are case-sensitive.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Critical" => Some(Priority::Critical),
            "High" => Some(Priority::High),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Rank of an optional raw label. Missing or unrecognised labels rank as
    /// [`Priority::Low`].
    pub fn rank_of(label: Option<&str>) -> u8 {
        label
            .and_then(Priority::parse)
            .map_or(Priority::Low.rank(), Priority::rank)
    }
}

/// Anything with an identity, a WGS-84 position, and an optional priority
/// label can be clustered.
///
/// The clustering pass clones implementors into its output untouched, so
/// arbitrary extra data carried by the record survives the pass.
pub trait GeoTicket {
    /// Unique ticket identifier.
    fn id(&self) -> &str;

    /// Latitude in decimal degrees.
    fn lat(&self) -> f64;

    /// Longitude in decimal degrees.
    fn lng(&self) -> f64;

    /// Raw priority label, if any.
    fn priority(&self) -> Option<&str> {
        None
    }
}

/// A field-service ticket with coordinates.
///
/// Fields other than `id`, `lat`, `lng` and `priority` are kept in `extra`
/// and serialised back at the top level, so a payload round-trips without
/// losing data the clustering never looks at.
///
/// # Examples
///
/// ```
/// use u_geocluster::models::{GeoTicket, Ticket};
///
/// let t = Ticket::new("FS-101", 51.5074, -0.1278)
///     .with_priority("High")
///     .with_field("city", "London");
/// assert_eq!(t.id(), "FS-101");
/// assert_eq!(t.priority(), Some("High"));
/// assert_eq!(t.extra["city"], "London");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Ticket {
    /// Creates a ticket with no priority and no extra fields.
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            priority: None,
            extra: Map::new(),
        }
    }

    /// Sets the raw priority label. Unrecognised labels are kept verbatim.
    pub fn with_priority(mut self, label: impl Into<String>) -> Self {
        self.priority = Some(label.into());
        self
    }

    /// Attaches an extra pass-through field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl GeoTicket for Ticket {
    fn id(&self) -> &str {
        &self.id
    }

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }

    fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }
}

impl<T: GeoTicket + ?Sized> GeoTicket for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lng(&self) -> f64 {
        (**self).lng()
    }

    fn priority(&self) -> Option<&str> {
        (**self).priority()
    }
}
