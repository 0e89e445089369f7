//! Application state

use roll_core::config::{load_character_sheet, load_roller_config};
use roll_core::{
    default_config, Ability, CharacterSheet, DieType, RollError, RollMode, RollOutcome,
    RollSpecification, RollerConfig, SessionEngine, Skill,
};
use std::path::Path;

/// Largest dice count the roller controls allow
pub const MAX_DICE: u32 = 20;

/// Longest label the roller accepts
pub const MAX_LABEL_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Roller,
    History,
    Character,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Roller, Tab::History, Tab::Character, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Roller => "Roller",
            Tab::History => "History",
            Tab::Character => "Character",
            Tab::Help => "Help",
        }
    }
}

/// One entry in the character quick roll list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRoll {
    Check(Ability),
    Save(Ability),
    Skill(Skill),
}

impl QuickRoll {
    /// Checks and saves for every ability, then every skill
    pub fn all() -> Vec<QuickRoll> {
        let mut rolls: Vec<QuickRoll> = Ability::all().iter().map(|a| QuickRoll::Check(*a)).collect();
        rolls.extend(Ability::all().iter().map(|a| QuickRoll::Save(*a)));
        rolls.extend(Skill::all().iter().map(|s| QuickRoll::Skill(*s)));
        rolls
    }

    pub fn specification(&self, sheet: &CharacterSheet) -> RollSpecification {
        match self {
            QuickRoll::Check(ability) => sheet.ability_check(*ability),
            QuickRoll::Save(ability) => sheet.saving_throw(*ability),
            QuickRoll::Skill(skill) => sheet.skill_check(*skill),
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub engine: SessionEngine,
    pub character: CharacterSheet,
    // Roller controls
    pub die: DieType,
    pub count: u32,
    pub modifier: i32,
    pub mode: RollMode,
    pub label: Option<String>,
    /// Label being typed; `Some` while the label editor is open
    pub label_input: Option<String>,
    // Character tab
    pub quick_rolls: Vec<QuickRoll>,
    pub quick_roll_index: usize,
    pub history_scroll: usize,
    pub status: String,
}

impl App {
    pub fn new(config: RollerConfig, character: CharacterSheet) -> Self {
        App {
            current_tab: Tab::Roller,
            engine: SessionEngine::from_config(&config),
            die: config.dice.default_die,
            count: config.dice.default_count.clamp(1, MAX_DICE),
            modifier: 0,
            mode: RollMode::Normal,
            label: None,
            label_input: None,
            character,
            quick_rolls: QuickRoll::all(),
            quick_roll_index: 0,
            history_scroll: 0,
            status: "Ready to roll.".to_string(),
        }
    }

    /// Build a session from optional config and character files. Files that
    /// fail to load are reported in the status line and replaced by defaults.
    pub fn load(config_path: Option<&Path>, character_path: Option<&Path>) -> Self {
        let mut problems = Vec::new();

        let config = match config_path {
            Some(path) => load_roller_config(path).unwrap_or_else(|e| {
                tracing::warn!("Could not load {}: {}", path.display(), e);
                problems.push(format!("config: {}", e));
                default_config()
            }),
            None => default_config(),
        };

        let character = match character_path {
            Some(path) => load_character_sheet(path).unwrap_or_else(|e| {
                tracing::warn!("Could not load {}: {}", path.display(), e);
                problems.push(format!("character: {}", e));
                CharacterSheet::default()
            }),
            None => CharacterSheet::default(),
        };

        let mut app = App::new(config, character);
        if !problems.is_empty() {
            app.status = format!("Using defaults ({})", problems.join("; "));
        }
        app
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(current_idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(current_idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Roller => self.count = (self.count + 1).min(MAX_DICE),
            Tab::History => self.history_scroll = self.history_scroll.saturating_sub(1),
            Tab::Character => self.quick_roll_index = self.quick_roll_index.saturating_sub(1),
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Roller => self.count = self.count.saturating_sub(1).max(1),
            Tab::History => {
                let last = self.engine.history().len().saturating_sub(1);
                self.history_scroll = (self.history_scroll + 1).min(last);
            }
            Tab::Character => {
                let last = self.quick_rolls.len().saturating_sub(1);
                self.quick_roll_index = (self.quick_roll_index + 1).min(last);
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Roller {
            self.die = self.die.prev();
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Roller {
            self.die = self.die.next();
        }
    }

    /// Roll from the active tab. Failures are reported in the status line.
    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Character => {
                if let Some(Err(e)) = self.roll_selected_quick_roll() {
                    tracing::debug!("Quick roll failed: {}", e);
                }
            }
            _ => {
                if let Err(e) = self.roll() {
                    tracing::debug!("Roll failed: {}", e);
                }
                self.history_scroll = 0;
            }
        }
    }

    pub fn increase_modifier(&mut self) {
        self.modifier = self.modifier.saturating_add(1);
    }

    pub fn decrease_modifier(&mut self) {
        self.modifier = self.modifier.saturating_sub(1);
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.cycle();
    }

    pub fn is_editing_label(&self) -> bool {
        self.label_input.is_some()
    }

    /// Open the label editor, starting from the current label
    pub fn begin_label_edit(&mut self) {
        self.label_input = Some(self.label.clone().unwrap_or_default());
    }

    pub fn push_label_char(&mut self, c: char) {
        if let Some(input) = self.label_input.as_mut() {
            if !c.is_control() && input.chars().count() < MAX_LABEL_LEN {
                input.push(c);
            }
        }
    }

    pub fn pop_label_char(&mut self) {
        if let Some(input) = self.label_input.as_mut() {
            input.pop();
        }
    }

    /// Close the editor and keep the typed label. Blank input clears it.
    pub fn commit_label(&mut self) {
        if let Some(input) = self.label_input.take() {
            let trimmed = input.trim();
            self.label = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
    }

    pub fn cancel_label_edit(&mut self) {
        self.label_input = None;
    }

    /// Specification built from the roller controls
    pub fn current_specification(&self) -> Result<RollSpecification, RollError> {
        let spec = RollSpecification::new(self.die, self.count, self.modifier)?.with_mode(self.mode);
        Ok(match &self.label {
            Some(label) => spec.with_label(label.clone()),
            None => spec,
        })
    }

    /// Roll with the current controls
    pub fn roll(&mut self) -> Result<RollOutcome, RollError> {
        let result = self
            .current_specification()
            .and_then(|spec| self.engine.evaluate(&spec));
        self.report(&result);
        result
    }

    pub fn selected_quick_roll(&self) -> Option<QuickRoll> {
        self.quick_rolls.get(self.quick_roll_index).copied()
    }

    /// Roll the highlighted quick roll, applying the selected mode
    pub fn roll_selected_quick_roll(&mut self) -> Option<Result<RollOutcome, RollError>> {
        let quick = self.selected_quick_roll()?;
        let spec = quick.specification(&self.character).with_mode(self.mode);
        let result = self.engine.evaluate(&spec);
        self.report(&result);
        Some(result)
    }

    pub fn clear_history(&mut self) {
        self.engine.clear_history();
        self.history_scroll = 0;
        self.status = "History cleared.".to_string();
    }

    pub fn last_outcome(&self) -> Option<&RollOutcome> {
        self.engine.history().latest()
    }

    fn report(&mut self, result: &Result<RollOutcome, RollError>) {
        self.status = match result {
            Ok(outcome) => {
                let label = outcome.label().map(|l| format!("{}: ", l)).unwrap_or_default();
                let mut text = format!("{}{} = {}", label, outcome.notation(), outcome.total());
                if outcome.is_natural_max() {
                    text.push_str("  NATURAL 20!");
                } else if outcome.is_natural_one() {
                    text.push_str("  Natural 1...");
                }
                text
            }
            Err(e) => format!("Roll failed: {}", e),
        };
    }
}
