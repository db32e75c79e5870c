//! Persistence-shaped projection of the form.

use serde::{Deserialize, Serialize};

use crate::form::PredictionForm;

/// The row written to the `predictions` table.
///
/// Unset choices are sent as empty strings rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Entrant's name as typed.
    pub name: String,
    /// Trimmed address.
    pub email: String,
    /// Predicted champion.
    pub title_winner: String,
    /// Top-four triad in slot order.
    pub top_4_teams: [String; 3],
    /// Relegation triad in slot order.
    pub relegated_teams: [String; 3],
    /// Predicted FA Cup winner.
    pub fa_cup_winner: String,
    /// Predicted Champions League winner.
    pub cl_winner: String,
    /// Manager predicted to leave first.
    pub first_manager_to_leave: String,
    /// `YYYY-MM-DD`, or empty.
    pub manager_leave_date: String,
    /// Best signing.
    pub biggest_hit_signing: String,
    /// Worst signing.
    pub biggest_flop_signing: String,
    /// Team predicted to overachieve.
    pub overachievers: String,
    /// Team predicted to underachieve.
    pub underachievers: String,
}

impl SubmissionRecord {
    /// Snapshot the current form values.
    pub fn from_form(form: &PredictionForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.trim().to_string(),
            title_winner: form.title_winner.clone(),
            top_4_teams: form.top4.clone(),
            relegated_teams: form.relegated.clone(),
            fa_cup_winner: form.fa_cup_winner.clone(),
            cl_winner: form.cl_winner.clone(),
            first_manager_to_leave: form.manager_to_leave.clone(),
            manager_leave_date: form.manager_leave_date.clone(),
            biggest_hit_signing: form.hit_signing.clone(),
            biggest_flop_signing: form.flop_signing.clone(),
            overachievers: form.overachievers.clone(),
            underachievers: form.underachievers.clone(),
        }
    }
}

impl From<&PredictionForm> for SubmissionRecord {
    fn from(form: &PredictionForm) -> Self {
        Self::from_form(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use serde_json::json;

    #[test]
    fn serializes_to_the_table_shape() {
        let mut form = PredictionForm::new();
        form.set(Field::Name, "Sam");
        form.set(Field::Email, "sam@example.com");
        form.set(Field::TitleWinner, "Arsenal");
        form.set(Field::Top4Second, "Chelsea");
        form.set(Field::RelegatedFirst, "Burnley");
        form.set(Field::ManagerLeaveDate, "2025-10-01");
        form.set(Field::HitSigning, "Wirtz");

        let value = serde_json::to_value(SubmissionRecord::from_form(&form)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Sam",
                "email": "sam@example.com",
                "title_winner": "Arsenal",
                "top_4_teams": ["", "Chelsea", ""],
                "relegated_teams": ["Burnley", "", ""],
                "fa_cup_winner": "",
                "cl_winner": "",
                "first_manager_to_leave": "",
                "manager_leave_date": "2025-10-01",
                "biggest_hit_signing": "Wirtz",
                "biggest_flop_signing": "",
                "overachievers": "",
                "underachievers": ""
            })
        );
    }

    #[test]
    fn email_is_stored_without_surrounding_whitespace() {
        let mut form = PredictionForm::new();
        form.set(Field::Email, "\t sam@example.com  ");
        let record = SubmissionRecord::from_form(&form);
        assert_eq!(record.email, "sam@example.com");
    }

    #[test]
    fn record_is_detached_from_later_edits() {
        let mut form = PredictionForm::new();
        form.set(Field::Name, "Sam");
        let record = SubmissionRecord::from(&form);
        form.set(Field::Name, "Alex");
        assert_eq!(record.name, "Sam");
    }
}
