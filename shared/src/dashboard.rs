//! Dashboard view logic
//!
//! Pure helpers the Admin, Employee and Team Lead dashboards apply to the
//! full collections they fetch. Nothing here talks to the server; every
//! function works on snapshots and is cheap to re-run after a re-fetch.

use crate::models::{Employee, Task, TaskStatus, TeamLead};

/// Common view of the person records (employees and team leads)
pub trait Person {
    /// Store-assigned identifier
    fn store_id(&self) -> &str;
    /// Business identifier
    fn business_id(&self) -> &str;
    fn name(&self) -> &str;
    fn email(&self) -> &str;
    fn team(&self) -> &str;
}

impl Person for Employee {
    fn store_id(&self) -> &str {
        &self.store_id
    }
    fn business_id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn email(&self) -> &str {
        &self.email
    }
    fn team(&self) -> &str {
        &self.team
    }
}

impl Person for TeamLead {
    fn store_id(&self) -> &str {
        &self.store_id
    }
    fn business_id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn email(&self) -> &str {
        &self.email
    }
    fn team(&self) -> &str {
        &self.team
    }
}

/// Plaintext login match used by the Employee and Team Lead dashboards.
///
/// The trimmed `id` must equal either the business id or the store id, and
/// the trimmed `email` must match case-insensitively. This identifies a
/// record; it is not authentication.
pub fn find_login<'a, P: Person>(people: &'a [P], id: &str, email: &str) -> Option<&'a P> {
    let id = id.trim();
    let email = email.trim().to_lowercase();
    if id.is_empty() || email.is_empty() {
        return None;
    }
    people.iter().find(|p| {
        (p.business_id().trim() == id || p.store_id().trim() == id)
            && p.email().to_lowercase() == email
    })
}

/// Tasks whose assignee name matches `name`, ignoring case
pub fn tasks_assigned_to<'a>(tasks: &'a [Task], name: &str) -> Vec<&'a Task> {
    let name = name.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.assigned_to.to_lowercase() == name)
        .collect()
}

/// People on exactly `team`
pub fn team_members<'a, P: Person>(people: &'a [P], team: &str) -> Vec<&'a P> {
    people.iter().filter(|p| p.team() == team).collect()
}

/// Tasks on exactly `team`
pub fn team_tasks<'a>(tasks: &'a [Task], team: &str) -> Vec<&'a Task> {
    tasks.iter().filter(|t| t.team == team).collect()
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Admin search over people: name, team, email or business id contains `query`
pub fn search_people<'a, P: Person>(people: &'a [P], query: &str) -> Vec<&'a P> {
    let q = query.to_lowercase();
    people
        .iter()
        .filter(|p| {
            contains_ignore_case(p.name(), &q)
                || contains_ignore_case(p.team(), &q)
                || contains_ignore_case(p.email(), &q)
                || contains_ignore_case(p.business_id(), &q)
        })
        .collect()
}

/// Admin search over tasks: task name, team or assignee contains `query`
pub fn search_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    let q = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| {
            contains_ignore_case(&t.task_name, &q)
                || contains_ignore_case(&t.team, &q)
                || contains_ignore_case(&t.assigned_to, &q)
        })
        .collect()
}

/// Number of tasks per status, in board order, zero-filled
pub fn status_counts(tasks: &[Task]) -> [(TaskStatus, usize); 4] {
    TaskStatus::ALL.map(|status| (status, tasks.iter().filter(|t| t.status == status).count()))
}

/// Group people by team, teams in first-seen order
pub fn group_by_team<P: Person>(people: &[P]) -> Vec<(String, Vec<&P>)> {
    let mut groups: Vec<(String, Vec<&P>)> = Vec::new();
    for person in people {
        match groups.iter_mut().find(|(team, _)| team == person.team()) {
            Some((_, members)) => members.push(person),
            None => groups.push((person.team().to_string(), vec![person])),
        }
    }
    groups
}

/// Checkbox selection of store ids, kept in click order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if unselected, otherwise unselect it
    pub fn toggle(&mut self, id: &str) {
        match self.ids.iter().position(|x| x == id) {
            Some(pos) => {
                self.ids.remove(pos);
            }
            None => self.ids.push(id.to_string()),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// Header checkbox state: every visible row is selected (and there is one)
    pub fn is_all_selected(&self, visible: &[&str]) -> bool {
        !visible.is_empty() && self.ids.len() == visible.len() && visible.iter().all(|id| self.contains(id))
    }

    /// Header checkbox click: clear when all visible rows are selected,
    /// otherwise select exactly the visible rows
    pub fn toggle_all(&mut self, visible: &[&str]) {
        if self.is_all_selected(visible) {
            self.ids.clear();
        } else {
            self.ids = visible.iter().map(|id| id.to_string()).collect();
        }
    }

    /// Forget ids that no longer exist after a re-fetch
    pub fn retain_existing(&mut self, existing: &[&str]) {
        self.ids.retain(|id| existing.contains(&id.as_str()));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Selected ids, ready for a bulk-delete body
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}
