//! Word lists: the three columns ideas are composed from.
//!
//! The lists are published as a three-column CSV (`what,whom,when_to`) with a
//! header row. Parsing is line/comma based: a row that does not
//! split into exactly three fields is skipped, fields are trimmed, and empty
//! cells are dropped per column, so the three lists need not share a length.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WordSource;
use crate::error::{check_status, ChesedResult};
use crate::idea::Slot;
use crate::store::IdeaStore;

/// Shown in a slot while its list is empty (still loading or failed).
pub const PLACEHOLDER: &str = "Loading...";

/// The three lists an idea is drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLists {
    pub what: Vec<String>,
    pub whom: Vec<String>,
    pub when_to: Vec<String>,
}

impl WordLists {
    /// The list backing a slot.
    pub fn get(&self, slot: Slot) -> &[String] {
        match slot {
            Slot::Action => &self.what,
            Slot::Recipient => &self.whom,
            Slot::Time => &self.when_to,
        }
    }

    /// True when no list has any entries.
    pub fn is_empty(&self) -> bool {
        self.what.is_empty() && self.whom.is_empty() && self.when_to.is_empty()
    }

    /// Uniformly pick an entry for `slot`, or [`PLACEHOLDER`] if its list is empty.
    ///
    /// Repeats of the currently displayed value are allowed.
    pub fn pick<R: Rng + ?Sized>(&self, slot: Slot, rng: &mut R) -> String {
        self.get(slot)
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// Parse the published CSV into word lists.
pub fn parse_word_lists(text: &str) -> WordLists {
    let rows: Vec<Vec<&str>> = text
        .split('\n')
        .skip(1)
        .map(|row| row.split(',').collect::<Vec<_>>())
        .filter(|fields| fields.len() == 3)
        .collect();

    let column = |index: usize| -> Vec<String> {
        rows.iter()
            .map(|fields| fields[index].trim())
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect()
    };

    WordLists {
        what: column(0),
        whom: column(1),
        when_to: column(2),
    }
}

/// Fetches the published CSV over HTTP.
#[derive(Debug, Clone)]
pub struct WordListLoader {
    client: reqwest::Client,
    url: String,
}

impl WordListLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download and parse the word lists.
    pub async fn load(&self) -> ChesedResult<WordLists> {
        tracing::debug!(url = %self.url, "Fetching word lists");
        let response = check_status(self.client.get(&self.url).send().await?).await?;
        let text = response.text().await?;
        let lists = parse_word_lists(&text);
        tracing::info!(
            what = lists.what.len(),
            whom = lists.whom.len(),
            when_to = lists.when_to.len(),
            "Loaded word lists"
        );
        Ok(lists)
    }
}

/// Load word lists from whichever source is configured.
///
/// A store without an `idea_components` row yields empty lists.
pub async fn load_word_lists(source: &WordSource, store: &dyn IdeaStore) -> ChesedResult<WordLists> {
    match source {
        WordSource::Csv(url) => WordListLoader::new(url.clone()).load().await,
        WordSource::Store => Ok(store
            .fetch_idea_components()
            .await?
            .map(|row| row.into_word_lists())
            .unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_skips_header_and_short_rows() {
        let csv = "what,whom,when_to\nVisit,a neighbor,today\nBake\nCall,a friend,this week,extra\n";
        let lists = parse_word_lists(csv);

        assert_eq!(lists.what, vec!["Visit"]);
        assert_eq!(lists.whom, vec!["a neighbor"]);
        assert_eq!(lists.when_to, vec!["today"]);
    }

    #[test]
    fn test_parse_trims_crlf() {
        let csv = "a,b,c\r\n Cook dinner , for a new mother ,tonight\r\n";
        let lists = parse_word_lists(csv);

        assert_eq!(lists.what, vec!["Cook dinner"]);
        assert_eq!(lists.whom, vec!["for a new mother"]);
        assert_eq!(lists.when_to, vec!["tonight"]);
    }

    #[test]
    fn test_parse_drops_empty_cells_per_column() {
        let csv = "a,b,c\nWrite a note,,tomorrow\n,your teacher,\n";
        let lists = parse_word_lists(csv);

        assert_eq!(lists.what, vec!["Write a note"]);
        assert_eq!(lists.whom, vec!["your teacher"]);
        assert_eq!(lists.when_to, vec!["tomorrow"]);
    }

    #[test]
    fn test_parse_header_only() {
        assert!(parse_word_lists("what,whom,when_to").is_empty());
        assert!(parse_word_lists("").is_empty());
    }

    #[test]
    fn test_pick_empty_list_gives_placeholder() {
        let lists = WordLists::default();
        let mut rng = StdRng::seed_from_u64(7);
        for slot in Slot::ALL {
            assert_eq!(lists.pick(slot, &mut rng), PLACEHOLDER);
        }
    }

    #[test]
    fn test_pick_draws_from_matching_list() {
        let lists = WordLists {
            what: vec!["Visit".into(), "Bake".into()],
            whom: vec!["a neighbor".into()],
            when_to: vec![],
        };
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let action = lists.pick(Slot::Action, &mut rng);
            assert!(lists.what.contains(&action));
        }
        assert_eq!(lists.pick(Slot::Recipient, &mut rng), "a neighbor");
        assert_eq!(lists.pick(Slot::Time, &mut rng), PLACEHOLDER);
    }
}
