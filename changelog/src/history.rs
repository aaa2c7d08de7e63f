use crate::config::Settings;
use crate::date::ChangelogDate;
use crate::formatter::format;
use crate::node::Node;
use crate::types::Result;
use chrono_tz::Tz;

/// Which date section to extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistorySelector {
    /// The most recent date section
    Latest,
    /// The section whose heading text equals the label
    Date(String),
}

impl HistorySelector {
    /// Selects the section for the current date in `tz`
    #[must_use]
    pub fn today(tz: Tz) -> Self {
        Self::Date(ChangelogDate::today(tz).to_string())
    }

    /// Builds a selector from command line style options
    ///
    /// An explicit `date` wins over `today`. Dates are rendered without
    /// padding so `2024.08.03` selects the `2024.8.3` section.
    ///
    /// # Errors
    /// Returns `InvalidDate` for a malformed `date` or `InvalidSettings` for a bad time zone
    pub fn from_options(today: bool, date: Option<&str>, settings: &Settings) -> Result<Self> {
        match date {
            Some(label) => Ok(Self::Date(ChangelogDate::parse(label)?.to_string())),
            None if today => Ok(Self::today(settings.time_zone()?)),
            None => Ok(Self::Latest),
        }
    }

    fn matches(&self, node: &Node) -> bool {
        match (self, node.heading()) {
            (Self::Latest, Some(_)) => true,
            (Self::Date(label), Some(heading)) => &heading.text == label,
            (_, None) => false,
        }
    }
}

/// Extracts one date section from the formatted form of `ast`
///
/// Returns an empty sequence when no section matches.
#[must_use]
pub fn get_history(ast: &[Node], selector: &HistorySelector, settings: &Settings) -> Vec<Node> {
    let formatted = format(settings, ast);

    let Some(start) = formatted
        .iter()
        .position(|node| node.is_date_heading() && selector.matches(node))
    else {
        log::debug!("No changelog section matches {selector:?}");
        return Vec::new();
    };

    let end = formatted[start + 1..]
        .iter()
        .position(Node::is_date_heading)
        .map_or(formatted.len(), |offset| start + 1 + offset);

    format(settings, &formatted[start..end])
}
