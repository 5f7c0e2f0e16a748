//! Hero "context sentence" picker
//!
//! "I feel <condition> and need <need>." Each facet cycles through its own
//! option list from settings. Applying the picker produces a context filter.

use crate::config::ContextSettings;

/// Current choice of the two facets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextPicker {
    conditions: Vec<String>,
    needs: Vec<String>,
    condition_index: usize,
    need_index: usize,
}

impl ContextPicker {
    pub fn new(settings: &ContextSettings) -> Self {
        Self {
            conditions: settings.conditions.clone(),
            needs: settings.needs.clone(),
            condition_index: 0,
            need_index: 0,
        }
    }

    pub fn condition(&self) -> Option<&str> {
        self.conditions.get(self.condition_index).map(String::as_str)
    }

    pub fn need(&self) -> Option<&str> {
        self.needs.get(self.need_index).map(String::as_str)
    }

    /// Both facets, if both option lists are non-empty
    pub fn selection(&self) -> Option<(&str, &str)> {
        Some((self.condition()?, self.need()?))
    }

    pub fn cycle_condition(&mut self, forward: bool) {
        self.condition_index = step(self.condition_index, self.conditions.len(), forward);
    }

    pub fn cycle_need(&mut self, forward: bool) {
        self.need_index = step(self.need_index, self.needs.len(), forward);
    }
}

fn step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ContextSettings {
        ContextSettings {
            conditions: vec!["anxious".into(), "lost".into(), "curious".into()],
            needs: vec!["structure".into(), "silence".into()],
        }
    }

    #[test]
    fn test_starts_at_first_options() {
        let picker = ContextPicker::new(&settings());
        assert_eq!(picker.selection(), Some(("anxious", "structure")));
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut picker = ContextPicker::new(&settings());
        picker.cycle_condition(false);
        assert_eq!(picker.condition(), Some("curious"));
        picker.cycle_condition(true);
        assert_eq!(picker.condition(), Some("anxious"));

        picker.cycle_need(true);
        picker.cycle_need(true);
        assert_eq!(picker.need(), Some("structure"));
    }

    #[test]
    fn test_empty_option_list_gives_no_selection() {
        let mut picker = ContextPicker::new(&ContextSettings {
            conditions: vec![],
            needs: vec!["silence".into()],
        });
        picker.cycle_condition(true);
        assert_eq!(picker.condition(), None);
        assert_eq!(picker.selection(), None);
    }
}
