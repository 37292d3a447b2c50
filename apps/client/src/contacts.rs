//! Local contact list state and filtering.
//!
//! [`ContactsState`] mirrors the server-side list and derives a filtered
//! view from it. The filtered view is recomputed on every mutation, so it
//! always equals `filter_contacts(&contacts, &search_term)`.

use api_protocol::Contact;

/// Returns the contacts matching the search term.
///
/// The term is matched exactly as typed: a case-insensitive substring check
/// against name and email, and a raw substring check against phone. Only the
/// empty term matches everything.
pub fn filter_contacts(contacts: &[Contact], term: &str) -> Vec<Contact> {
    if term.is_empty() {
        return contacts.to_vec();
    }

    let needle = term.to_lowercase();
    contacts
        .iter()
        .filter(|contact| {
            contact.name.to_lowercase().contains(&needle)
                || contact.email.to_lowercase().contains(&needle)
                || contact.phone.contains(term)
        })
        .cloned()
        .collect()
}

/// Contact list state: the full list, the active search term, and the
/// filtered view derived from both.
#[derive(Debug, Clone, Default)]
pub struct ContactsState {
    /// All contacts owned by the logged-in user, newest first.
    pub contacts: Vec<Contact>,
    /// Contacts matching the active search term.
    pub filtered: Vec<Contact>,
    /// Active search term.
    pub search_term: String,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Last request error, if any.
    pub error: Option<String>,
}

impl ContactsState {
    pub fn new() -> Self {
        Self::default()
    }

    fn refilter(&mut self) {
        self.filtered = filter_contacts(&self.contacts, &self.search_term);
    }

    /// Replaces the whole list, e.g. after a fetch.
    pub fn set_contacts(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
        self.loading = false;
        self.error = None;
        self.refilter();
    }

    /// Changes the search term and rederives the filtered view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    /// Clears the search term; the filtered view becomes the full list.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.refilter();
    }

    /// Applies a server-confirmed create. New contacts go to the front to
    /// keep the list newest-first.
    pub fn apply_created(&mut self, contact: Contact) {
        self.contacts.insert(0, contact);
        self.refilter();
    }

    /// Applies a server-confirmed update in place.
    pub fn apply_updated(&mut self, contact: Contact) {
        if let Some(existing) = self.contacts.iter_mut().find(|c| c.id == contact.id) {
            *existing = contact;
        }
        self.refilter();
    }

    /// Applies a server-confirmed delete.
    pub fn apply_deleted(&mut self, id: &str) {
        self.contacts.retain(|c| c.id != id);
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn contact(id: &str, name: &str, email: &str, phone: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            company: None,
            notes: None,
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Contact> {
        vec![
            contact("c1", "Alice Johnson", "alice@example.com", "5551234567"),
            contact("c2", "Bob Smith", "bob@work.org", "5559876543"),
            contact("c3", "Carol Álvarez", "", "+14155550123"),
        ]
    }

    #[test]
    fn test_empty_term_is_identity() {
        let contacts = sample();
        assert_eq!(filter_contacts(&contacts, ""), contacts);
    }

    #[test]
    fn test_term_is_matched_as_typed() {
        let contacts = vec![
            contact("c1", "Alice Johnson", "alice@example.com", "5551234567"),
            contact("c2", "Bob", "bob@work.org", "5559876543"),
        ];

        // a whitespace-only term is a literal match, not the identity
        let filtered = filter_contacts(&contacts, " ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c1");

        // surrounding spaces are part of the term
        assert!(filter_contacts(&contacts, " alice").is_empty());
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let filtered = filter_contacts(&sample(), "ALICE");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c1");
    }

    #[test]
    fn test_email_match_is_case_insensitive() {
        let filtered = filter_contacts(&sample(), "Work.ORG");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c2");
    }

    #[test]
    fn test_phone_match_is_raw_substring() {
        let filtered = filter_contacts(&sample(), "4155550");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c3");
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let once = filter_contacts(&sample(), "555");
        let twice = filter_contacts(&once, "555");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_every_match_comes_from_the_input() {
        let contacts = sample();
        let filtered = filter_contacts(&contacts, "o");
        assert!(filtered.iter().all(|c| contacts.contains(c)));
    }

    #[test]
    fn test_filtered_view_tracks_every_mutation() {
        let mut state = ContactsState::new();
        state.set_contacts(sample());
        state.set_search_term("alice");
        assert_eq!(state.filtered.len(), 1);

        // create matching the term shows up in the view immediately
        state.apply_created(contact("c4", "Alice Cooper", "cooper@x.com", ""));
        assert_eq!(state.filtered.len(), 2);
        assert_eq!(state.filtered[0].id, "c4");

        // rename out of the term drops it from the view
        let mut renamed = state.contacts[0].clone();
        renamed.name = "Vincent".to_string();
        state.apply_updated(renamed);
        assert_eq!(state.filtered.len(), 1);

        state.apply_deleted("c1");
        assert!(state.filtered.is_empty());

        // the invariant holds after the whole sequence
        assert_eq!(
            state.filtered,
            filter_contacts(&state.contacts, &state.search_term)
        );
    }

    #[test]
    fn test_clear_filters_restores_full_view() {
        let mut state = ContactsState::new();
        state.set_contacts(sample());
        state.set_search_term("bob");
        assert_eq!(state.filtered.len(), 1);

        state.clear_filters();
        assert_eq!(state.filtered, state.contacts);
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn test_created_contacts_are_prepended() {
        let mut state = ContactsState::new();
        state.set_contacts(sample());
        state.apply_created(contact("c9", "Newest", "", "5550000000"));
        assert_eq!(state.contacts[0].id, "c9");
    }
}
