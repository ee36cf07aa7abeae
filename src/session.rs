//! Form session state and its update cycle.
//!
//! A front-end owns one `Session`, feeds it `Msg`s from user input and network completions,
//! and performs the `Dispatch` returned for each triggered action. The three actions are
//! independent: each has its own in-flight counter and error slot, so a pending keyword
//! generation never blocks or overwrites an audience suggestion.
//!
//! Overlapping calls for the *same* action are not cancelled. Their completions are applied
//! in arrival order, so whichever resolves last wins the result field and the error slot.

use serde::{Deserialize, Serialize};

use crate::ai::{prompts, AiError, Completer};
use crate::fields::{Field, FormFields};
use crate::keywords::{AudienceSuggestionList, KeywordList, ListError};
use crate::parse::{self, Block};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    GenerateKeywords,
    SuggestAudience,
    OptimizeDescription,
}

impl Action {
    fn slot(self) -> usize {
        match self {
            Self::GenerateKeywords => 0,
            Self::SuggestAudience => 1,
            Self::OptimizeDescription => 2,
        }
    }
}

#[derive(Debug)]
pub enum Msg {
    SetField(Field, String),
    /// User triggered an action; the session answers with the prompt to send.
    Request(Action),
    /// The relay answered (or failed) for an earlier `Request`.
    Completed(Action, Result<String, AiError>),
    AddKeyword(String),
    EditKeyword(usize, String),
    StageKeywordRemoval(usize),
    ConfirmKeywordRemoval,
    CancelKeywordRemoval,
    DismissError(Action),
}

/// A prompt the front-end must send to the relay, then report back with `Msg::Completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub action: Action,
    pub prompt: String,
}

#[derive(Debug, Clone, Default)]
struct ActionState {
    in_flight: u32,
    error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    fields: FormFields,
    keywords: KeywordList,
    audience: AudienceSuggestionList,
    description: String,
    blocks: Vec<Block>,
    actions: [ActionState; 3],
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, msg: Msg) -> Result<Option<Dispatch>, ListError> {
        match msg {
            Msg::SetField(field, value) => self.fields.set(field, &value),
            Msg::Request(action) => return Ok(Some(self.begin(action))),
            Msg::Completed(action, result) => self.finish(action, result),
            Msg::AddKeyword(value) => {
                self.keywords.append(value);
            }
            Msg::EditKeyword(index, value) => {
                self.keywords.replace_at(index, value)?;
            }
            Msg::StageKeywordRemoval(index) => {
                self.keywords.stage_removal(index)?;
            }
            Msg::ConfirmKeywordRemoval => {
                self.keywords.confirm_removal()?;
            }
            Msg::CancelKeywordRemoval => {
                self.keywords.cancel_removal();
            }
            Msg::DismissError(action) => self.actions[action.slot()].error = None,
        }
        Ok(None)
    }

    /// Run one action to completion against `completer`, blocking until it answers.
    pub fn run(&mut self, action: Action, completer: &dyn Completer) -> Result<(), AiError> {
        let dispatch = self.begin(action);
        let result = completer.complete(&dispatch.prompt);
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        self.finish(action, result);
        outcome
    }

    fn begin(&mut self, action: Action) -> Dispatch {
        let state = &mut self.actions[action.slot()];
        state.in_flight += 1;
        state.error = None;

        let prompt = match action {
            Action::GenerateKeywords => prompts::generate_keywords(&self.fields),
            Action::SuggestAudience => prompts::suggest_audience(&self.fields),
            Action::OptimizeDescription => {
                prompts::optimize_description(&self.fields, &self.keywords, &self.audience)
            }
        };
        Dispatch { action, prompt }
    }

    fn finish(&mut self, action: Action, result: Result<String, AiError>) {
        let state = &mut self.actions[action.slot()];
        state.in_flight = state.in_flight.saturating_sub(1);

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{:?} failed: {}", action, e);
                state.error = Some(e.to_string());
                return;
            }
        };
        state.error = None;

        match action {
            Action::GenerateKeywords => self.keywords.reset(parse::parse_editable_list(&text)),
            Action::SuggestAudience => self.audience.reset(parse::parse_list(&text)),
            Action::OptimizeDescription => {
                self.blocks = parse::parse_description(&text);
                self.description = text;
            }
        }
    }

    // ── Accessors ─────────────────────────────────────

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn keywords(&self) -> &KeywordList {
        &self.keywords
    }

    pub fn audience(&self) -> &AudienceSuggestionList {
        &self.audience
    }

    /// Raw text of the last successful optimization.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Plain text of the rendered description, for clipboard copy.
    pub fn copy_text(&self) -> String {
        parse::blocks_to_text(&self.blocks)
    }

    pub fn is_loading(&self, action: Action) -> bool {
        self.actions[action.slot()].in_flight > 0
    }

    pub fn error(&self, action: Action) -> Option<&str> {
        self.actions[action.slot()].error.as_deref()
    }
}
