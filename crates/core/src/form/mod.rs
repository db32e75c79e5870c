//! Prediction form state and derived option lists.

/// Player-name suggestions for the signing questions.
pub mod suggest;
/// Required-field and format checks run before a write.
pub mod validate;

pub use suggest::{suggest, Autocomplete, SUGGESTION_LIMIT};
pub use validate::validate;

use serde::{Deserialize, Serialize};

use crate::models::TeamCatalog;

/// Every input on the form, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Entrant's name. Required.
    Name,
    /// Entrant's email. Required.
    Email,
    /// Premier League champion.
    TitleWinner,
    /// First of the three other top-four teams.
    Top4First,
    /// Second of the three other top-four teams.
    Top4Second,
    /// Third of the three other top-four teams.
    Top4Third,
    /// First relegated team.
    RelegatedFirst,
    /// Second relegated team.
    RelegatedSecond,
    /// Third relegated team.
    RelegatedThird,
    /// FA Cup winner.
    FaCupWinner,
    /// Champions League winner.
    ClWinner,
    /// First manager to leave their club.
    ManagerToLeave,
    /// When that manager leaves.
    ManagerLeaveDate,
    /// Best signing of the season.
    HitSigning,
    /// Worst signing of the season.
    FlopSigning,
    /// Team that beats expectations.
    Overachievers,
    /// Team that falls short.
    Underachievers,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Free text checked as an email address.
    Email,
    /// Optional `YYYY-MM-DD` date.
    Date,
    /// Single choice from the team catalog.
    Team,
    /// Free text with player-name suggestions.
    Player,
}

/// A "pick three distinct teams" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamGroup {
    /// The three other top-four finishers.
    Top4,
    /// The three relegated teams.
    Relegated,
}

impl TeamGroup {
    /// Member fields in display order.
    pub fn members(self) -> [Field; 3] {
        match self {
            TeamGroup::Top4 => [Field::Top4First, Field::Top4Second, Field::Top4Third],
            TeamGroup::Relegated => [
                Field::RelegatedFirst,
                Field::RelegatedSecond,
                Field::RelegatedThird,
            ],
        }
    }
}

impl Field {
    /// Every field in on-screen order.
    pub const ALL: [Field; 17] = [
        Field::Name,
        Field::Email,
        Field::TitleWinner,
        Field::Top4First,
        Field::Top4Second,
        Field::Top4Third,
        Field::RelegatedFirst,
        Field::RelegatedSecond,
        Field::RelegatedThird,
        Field::FaCupWinner,
        Field::ClWinner,
        Field::ManagerToLeave,
        Field::ManagerLeaveDate,
        Field::HitSigning,
        Field::FlopSigning,
        Field::Overachievers,
        Field::Underachievers,
    ];

    /// Input style for this field.
    pub fn kind(self) -> FieldKind {
        match self {
            Field::Name | Field::ManagerToLeave => FieldKind::Text,
            Field::Email => FieldKind::Email,
            Field::ManagerLeaveDate => FieldKind::Date,
            Field::HitSigning | Field::FlopSigning => FieldKind::Player,
            _ => FieldKind::Team,
        }
    }

    /// The triad this field belongs to, if any.
    pub fn group(self) -> Option<TeamGroup> {
        match self {
            Field::Top4First | Field::Top4Second | Field::Top4Third => Some(TeamGroup::Top4),
            Field::RelegatedFirst | Field::RelegatedSecond | Field::RelegatedThird => {
                Some(TeamGroup::Relegated)
            }
            _ => None,
        }
    }

    /// The other members of this field's triad; empty outside a triad.
    pub fn siblings(self) -> Vec<Field> {
        self.group()
            .map(|group| {
                group
                    .members()
                    .into_iter()
                    .filter(|member| *member != self)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Question text. Triad members after the first share their question.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::TitleWinner => "1. Premier League Title Winner",
            Field::Top4First | Field::Top4Second | Field::Top4Third => "2. Other Top 4 Teams",
            Field::RelegatedFirst | Field::RelegatedSecond | Field::RelegatedThird => {
                "3. Relegated Teams"
            }
            Field::FaCupWinner => "4. FA Cup Winner",
            Field::ClWinner => "5. Champions League Winner",
            Field::ManagerToLeave => "6. First Manager to Leave",
            Field::ManagerLeaveDate => "7. When will they leave?",
            Field::HitSigning => "8. Biggest Hit Signing",
            Field::FlopSigning => "9. Biggest Flop Signing",
            Field::Overachievers => "10. Biggest Overachievers",
            Field::Underachievers => "11. Biggest Underachievers",
        }
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter your name",
            Field::Email => "Enter your email",
            Field::ManagerToLeave => "Enter manager's name",
            Field::ManagerLeaveDate => "YYYY-MM-DD",
            Field::HitSigning | Field::FlopSigning => "Enter player's name",
            Field::Top4First
            | Field::Top4Second
            | Field::Top4Third
            | Field::RelegatedFirst
            | Field::RelegatedSecond
            | Field::RelegatedThird => "Select team...",
            _ => "Select a team...",
        }
    }

    /// Whether submit is blocked while this field is blank.
    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Email)
    }
}

/// Current value of every input. An empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionForm {
    /// See [`Field::Name`].
    pub name: String,
    /// See [`Field::Email`].
    pub email: String,
    /// See [`Field::TitleWinner`].
    pub title_winner: String,
    /// The top-four triad, in slot order.
    pub top4: [String; 3],
    /// The relegation triad, in slot order.
    pub relegated: [String; 3],
    /// See [`Field::FaCupWinner`].
    pub fa_cup_winner: String,
    /// See [`Field::ClWinner`].
    pub cl_winner: String,
    /// See [`Field::ManagerToLeave`].
    pub manager_to_leave: String,
    /// Raw date text; validated only on submit.
    pub manager_leave_date: String,
    /// See [`Field::HitSigning`].
    pub hit_signing: String,
    /// See [`Field::FlopSigning`].
    pub flop_signing: String,
    /// See [`Field::Overachievers`].
    pub overachievers: String,
    /// See [`Field::Underachievers`].
    pub underachievers: String,
}

impl PredictionForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::TitleWinner => &self.title_winner,
            Field::Top4First => &self.top4[0],
            Field::Top4Second => &self.top4[1],
            Field::Top4Third => &self.top4[2],
            Field::RelegatedFirst => &self.relegated[0],
            Field::RelegatedSecond => &self.relegated[1],
            Field::RelegatedThird => &self.relegated[2],
            Field::FaCupWinner => &self.fa_cup_winner,
            Field::ClWinner => &self.cl_winner,
            Field::ManagerToLeave => &self.manager_to_leave,
            Field::ManagerLeaveDate => &self.manager_leave_date,
            Field::HitSigning => &self.hit_signing,
            Field::FlopSigning => &self.flop_signing,
            Field::Overachievers => &self.overachievers,
            Field::Underachievers => &self.underachievers,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::TitleWinner => &mut self.title_winner,
            Field::Top4First => &mut self.top4[0],
            Field::Top4Second => &mut self.top4[1],
            Field::Top4Third => &mut self.top4[2],
            Field::RelegatedFirst => &mut self.relegated[0],
            Field::RelegatedSecond => &mut self.relegated[1],
            Field::RelegatedThird => &mut self.relegated[2],
            Field::FaCupWinner => &mut self.fa_cup_winner,
            Field::ClWinner => &mut self.cl_winner,
            Field::ManagerToLeave => &mut self.manager_to_leave,
            Field::ManagerLeaveDate => &mut self.manager_leave_date,
            Field::HitSigning => &mut self.hit_signing,
            Field::FlopSigning => &mut self.flop_signing,
            Field::Overachievers => &mut self.overachievers,
            Field::Underachievers => &mut self.underachievers,
        }
    }

    /// Replace a field's value.
    ///
    /// Option lists already hide values taken by triad siblings, so this does
    /// not re-check the triad constraint.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Unset one field.
    pub fn clear(&mut self, field: Field) {
        self.slot_mut(field).clear();
    }

    /// Return every field to its initial empty value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no field holds a value.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Teams selectable for `field`: the catalog minus values held by its triad
/// siblings. The field's own value stays listed.
pub fn team_options<'a>(
    catalog: &'a TeamCatalog,
    form: &PredictionForm,
    field: Field,
) -> Vec<&'a str> {
    if field.kind() != FieldKind::Team {
        return Vec::new();
    }

    let taken: Vec<&str> = field
        .siblings()
        .into_iter()
        .map(|sibling| form.get(sibling))
        .filter(|value| !value.is_empty())
        .collect();

    catalog
        .names()
        .iter()
        .map(String::as_str)
        .filter(|name| !taken.contains(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TeamCatalog {
        TeamCatalog::from_names(["Arsenal", "Chelsea", "Liverpool", "Man City", "Spurs"])
    }

    #[test]
    fn single_choice_fields_list_full_catalog() {
        let catalog = catalog();
        let mut form = PredictionForm::new();
        form.set(Field::Top4First, "Arsenal");
        for field in [
            Field::TitleWinner,
            Field::FaCupWinner,
            Field::ClWinner,
            Field::Overachievers,
            Field::Underachievers,
        ] {
            assert_eq!(team_options(&catalog, &form, field), catalog.names());
        }
    }

    #[test]
    fn triad_excludes_siblings_only() {
        let catalog = TeamCatalog::from_names(["Arsenal", "Chelsea", "Liverpool"]);
        let mut form = PredictionForm::new();
        form.set(Field::TitleWinner, "Arsenal");
        form.set(Field::Top4First, "Chelsea");

        assert_eq!(
            team_options(&catalog, &form, Field::Top4Second),
            ["Arsenal", "Liverpool"]
        );
        assert_eq!(
            team_options(&catalog, &form, Field::Top4First),
            ["Arsenal", "Chelsea", "Liverpool"]
        );
    }

    #[test]
    fn triad_options_never_contain_sibling_values_and_keep_own() {
        let catalog = catalog();
        let names = catalog.names().to_vec();
        for group in [TeamGroup::Top4, TeamGroup::Relegated] {
            let [a, b, c] = group.members();
            for va in &names {
                for vb in names.iter().filter(|name| *name != va) {
                    for vc in names.iter().filter(|name| *name != va && *name != vb) {
                        let mut form = PredictionForm::new();
                        form.set(a, va.as_str());
                        form.set(b, vb.as_str());
                        form.set(c, vc.as_str());
                        for field in [a, b, c] {
                            let options = team_options(&catalog, &form, field);
                            assert!(options.contains(&form.get(field)));
                            for sibling in field.siblings() {
                                assert!(!options.contains(&form.get(sibling)));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn triads_are_independent() {
        let catalog = catalog();
        let mut form = PredictionForm::new();
        form.set(Field::Top4First, "Arsenal");
        form.set(Field::Top4Second, "Chelsea");
        assert_eq!(
            team_options(&catalog, &form, Field::RelegatedFirst),
            catalog.names()
        );
    }

    #[test]
    fn empty_catalog_yields_no_options() {
        let form = PredictionForm::new();
        assert!(team_options(&TeamCatalog::default(), &form, Field::TitleWinner).is_empty());
    }

    #[test]
    fn non_team_fields_have_no_options() {
        let form = PredictionForm::new();
        assert!(team_options(&catalog(), &form, Field::HitSigning).is_empty());
        assert!(team_options(&catalog(), &form, Field::Name).is_empty());
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = PredictionForm::new();
        for field in Field::ALL {
            form.set(field, "x");
        }
        assert!(!form.is_empty());
        form.reset();
        assert!(form.is_empty());
        assert_eq!(form, PredictionForm::default());
    }

    #[test]
    fn siblings_cover_the_other_two_members() {
        assert_eq!(
            Field::RelegatedSecond.siblings(),
            [Field::RelegatedFirst, Field::RelegatedThird]
        );
        assert!(Field::TitleWinner.siblings().is_empty());
    }
}
