//! Typed configuration payloads for interactive elements.
//!
//! Rows store configuration as free-form JSON. It is decoded once, where the
//! row enters the system, into the payload shape selected by the element's
//! [`ElementType`]. Decoding failures become a [`ConfigurationError`] that
//! travels with the element instead of failing the whole lesson.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ConfigurationError, ConfigurationShape, ElementType};

/// Default number of learner turns before a chat counts as complete.
pub const DEFAULT_MIN_EXCHANGES: u32 = 3;

/// Minimum options for a multiple-choice question.
pub const MIN_OPTIONS: usize = 2;

/// Minimum items for an ordering exercise.
pub const MIN_SORTER_ITEMS: usize = 2;

fn default_min_exchanges() -> u32 {
    DEFAULT_MIN_EXCHANGES
}

// ════════════════════════════════════════════════════════════════════════════════
// Payload shapes
// ════════════════════════════════════════════════════════════════════════════════

/// Highlighted note inside the lesson flow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalloutBoxConfig {
    #[serde(default, alias = "variant")]
    pub style: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Coaching conversation with the mentor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_min_exchanges", alias = "minExchanges")]
    pub min_exchanges: u32,
    #[serde(default, alias = "systemPrompt")]
    pub system_prompt: Option<String>,
    #[serde(default, alias = "starterPrompts")]
    pub starter_prompts: Vec<String>,
}

/// Single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeCheckConfig {
    pub question: String,
    #[serde(alias = "answers")]
    pub options: Vec<String>,
    #[serde(alias = "correct", alias = "correctAnswer")]
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// One situation in a scenario quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(alias = "question", alias = "scenario")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correct", alias = "correctAnswer")]
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Series of multiple-choice scenarios scored together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenariosConfig {
    pub scenarios: Vec<ScenarioConfig>,
}

/// Ordering exercise. `items` lists the correct order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceSorterConfig {
    pub items: Vec<String>,
}

/// AI-assisted generator or assistant.
///
/// Keys this service does not interpret are kept in `extra` and handed to
/// the renderer unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AiToolConfig {
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default, alias = "promptTemplate", alias = "prompt")]
    pub prompt_template: Option<String>,
    #[serde(default, alias = "inputFields")]
    pub input_fields: Vec<String>,
    #[serde(default, alias = "maxOutputTokens")]
    pub max_output_tokens: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metric tracking worksheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default)]
    pub target: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Authoring or maintenance tool.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminToolConfig {
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Tagged union
// ════════════════════════════════════════════════════════════════════════════════

/// Configuration of an interactive element, one variant per payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ElementConfiguration {
    CalloutBox(CalloutBoxConfig),
    Chat(ChatConfig),
    KnowledgeCheck(KnowledgeCheckConfig),
    Scenarios(ScenariosConfig),
    SequenceSorter(SequenceSorterConfig),
    AiTool(AiToolConfig),
    Tracker(TrackerConfig),
    AdminTool(AdminToolConfig),
}

impl ElementConfiguration {
    /// Decodes and validates the stored configuration for `element_type`.
    ///
    /// A missing or `null` value is read as an empty object, so shapes with
    /// required fields fail while all-optional shapes get their defaults.
    pub fn parse(
        element_type: ElementType,
        raw: Option<&Value>,
    ) -> Result<Self, ConfigurationError> {
        let value = match raw {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(Value::Object(map)) => Value::Object(map.clone()),
            Some(other) => {
                return Err(ConfigurationError::malformed(
                    element_type,
                    format!("expected a JSON object, got {}", json_kind(other)),
                ))
            }
        };

        let config = match element_type.configuration_shape() {
            ConfigurationShape::CalloutBox => {
                ElementConfiguration::CalloutBox(decode(element_type, value)?)
            }
            ConfigurationShape::Chat => ElementConfiguration::Chat(decode(element_type, value)?),
            ConfigurationShape::KnowledgeCheck => {
                ElementConfiguration::KnowledgeCheck(decode(element_type, value)?)
            }
            ConfigurationShape::Scenarios => {
                ElementConfiguration::Scenarios(decode(element_type, value)?)
            }
            ConfigurationShape::SequenceSorter => {
                ElementConfiguration::SequenceSorter(decode(element_type, value)?)
            }
            ConfigurationShape::AiTool => {
                ElementConfiguration::AiTool(decode(element_type, value)?)
            }
            ConfigurationShape::Tracker => {
                ElementConfiguration::Tracker(decode(element_type, value)?)
            }
            ConfigurationShape::AdminTool => {
                ElementConfiguration::AdminTool(decode(element_type, value)?)
            }
        };

        config.validate(element_type)?;
        Ok(config)
    }

    /// Semantic checks that serde cannot express.
    fn validate(&self, element_type: ElementType) -> Result<(), ConfigurationError> {
        match self {
            ElementConfiguration::KnowledgeCheck(kc) => {
                check_question(element_type, "question", &kc.question, &kc.options, kc.correct_answer)
            }
            ElementConfiguration::Scenarios(s) => {
                if s.scenarios.is_empty() {
                    return Err(ConfigurationError::invalid(
                        element_type,
                        "scenarios list is empty",
                    ));
                }
                for (i, scenario) in s.scenarios.iter().enumerate() {
                    check_question(
                        element_type,
                        &format!("scenarios[{}].prompt", i),
                        &scenario.prompt,
                        &scenario.options,
                        scenario.correct_answer,
                    )?;
                }
                Ok(())
            }
            ElementConfiguration::SequenceSorter(s) => {
                if s.items.len() < MIN_SORTER_ITEMS {
                    return Err(ConfigurationError::invalid(
                        element_type,
                        format!(
                            "needs at least {} items, got {}",
                            MIN_SORTER_ITEMS,
                            s.items.len()
                        ),
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Shape this payload was decoded into.
    pub fn shape(&self) -> ConfigurationShape {
        match self {
            ElementConfiguration::CalloutBox(_) => ConfigurationShape::CalloutBox,
            ElementConfiguration::Chat(_) => ConfigurationShape::Chat,
            ElementConfiguration::KnowledgeCheck(_) => ConfigurationShape::KnowledgeCheck,
            ElementConfiguration::Scenarios(_) => ConfigurationShape::Scenarios,
            ElementConfiguration::SequenceSorter(_) => ConfigurationShape::SequenceSorter,
            ElementConfiguration::AiTool(_) => ConfigurationShape::AiTool,
            ElementConfiguration::Tracker(_) => ConfigurationShape::Tracker,
            ElementConfiguration::AdminTool(_) => ConfigurationShape::AdminTool,
        }
    }
}

fn decode<T: DeserializeOwned>(
    element_type: ElementType,
    value: Value,
) -> Result<T, ConfigurationError> {
    serde_json::from_value(value)
        .map_err(|e| ConfigurationError::malformed(element_type, e.to_string()))
}

fn check_question(
    element_type: ElementType,
    field: &str,
    question: &str,
    options: &[String],
    correct_answer: usize,
) -> Result<(), ConfigurationError> {
    if question.trim().is_empty() {
        return Err(ConfigurationError::invalid(
            element_type,
            format!("{} is empty", field),
        ));
    }
    if options.len() < MIN_OPTIONS {
        return Err(ConfigurationError::invalid(
            element_type,
            format!(
                "{} needs at least {} options, got {}",
                field,
                MIN_OPTIONS,
                options.len()
            ),
        ));
    }
    if correct_answer >= options.len() {
        return Err(ConfigurationError::invalid(
            element_type,
            format!(
                "{} correct answer {} is out of range for {} options",
                field,
                correct_answer,
                options.len()
            ),
        ));
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_configuration_gives_defaults_for_optional_shapes() {
        let config = ElementConfiguration::parse(ElementType::LyraChat, None).unwrap();
        match config {
            ElementConfiguration::Chat(chat) => {
                assert_eq!(chat.min_exchanges, DEFAULT_MIN_EXCHANGES);
                assert!(chat.starter_prompts.is_empty());
            }
            other => panic!("unexpected shape {:?}", other),
        }

        let config =
            ElementConfiguration::parse(ElementType::AiEmailComposer, Some(&Value::Null)).unwrap();
        assert_eq!(config.shape(), ConfigurationShape::AiTool);
    }

    #[test]
    fn knowledge_check_accepts_legacy_keys() {
        let raw = json!({
            "question": "Which task suits AI best?",
            "answers": ["Drafting", "Signing contracts"],
            "correctAnswer": 0
        });
        let config = ElementConfiguration::parse(ElementType::KnowledgeCheck, Some(&raw)).unwrap();
        match config {
            ElementConfiguration::KnowledgeCheck(kc) => {
                assert_eq!(kc.options.len(), 2);
                assert_eq!(kc.correct_answer, 0);
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn knowledge_check_without_question_is_malformed() {
        let err = ElementConfiguration::parse(ElementType::KnowledgeCheck, None).unwrap_err();
        assert!(matches!(err, ConfigurationError::Malformed { .. }));
    }

    #[test]
    fn null_question_list_is_malformed() {
        let raw = json!({ "scenarios": null });
        let err =
            ElementConfiguration::parse(ElementType::MultipleChoiceScenarios, Some(&raw)).unwrap_err();
        assert!(matches!(err, ConfigurationError::Malformed { .. }));
    }

    #[test]
    fn correct_answer_out_of_range_is_invalid() {
        let raw = json!({
            "question": "Pick one",
            "options": ["a", "b"],
            "correct": 2
        });
        let err = ElementConfiguration::parse(ElementType::KnowledgeCheck, Some(&raw)).unwrap_err();
        assert!(matches!(err, ConfigurationError::Invalid { .. }));
    }

    #[test]
    fn empty_scenarios_are_invalid() {
        let raw = json!({ "scenarios": [] });
        let err =
            ElementConfiguration::parse(ElementType::MultipleChoiceScenarios, Some(&raw)).unwrap_err();
        assert!(matches!(err, ConfigurationError::Invalid { .. }));
    }

    #[test]
    fn scenario_errors_name_the_index() {
        let raw = json!({
            "scenarios": [
                { "prompt": "First", "options": ["x", "y"], "correct_answer": 1 },
                { "prompt": "Second", "options": ["only"], "correct_answer": 0 }
            ]
        });
        let err =
            ElementConfiguration::parse(ElementType::MultipleChoiceScenarios, Some(&raw)).unwrap_err();
        assert!(err.to_string().contains("scenarios[1]"));
    }

    #[test]
    fn sorter_needs_two_items() {
        let raw = json!({ "items": ["only"] });
        let err = ElementConfiguration::parse(ElementType::SequenceSorter, Some(&raw)).unwrap_err();
        assert!(matches!(err, ConfigurationError::Invalid { .. }));
    }

    #[test]
    fn non_object_configuration_is_malformed() {
        let raw = json!("just text");
        let err = ElementConfiguration::parse(ElementType::CalloutBox, Some(&raw)).unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn ai_tool_keeps_unknown_keys() {
        let raw = json!({ "character": "sofia", "tone_options": ["warm", "direct"] });
        let config = ElementConfiguration::parse(ElementType::StorytellingAgent, Some(&raw)).unwrap();
        match config {
            ElementConfiguration::AiTool(tool) => {
                assert_eq!(tool.character.as_deref(), Some("sofia"));
                assert!(tool.extra.contains_key("tone_options"));
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn serialized_configuration_carries_shape_tag() {
        let config = ElementConfiguration::parse(ElementType::KpiTracker, None).unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["shape"], "tracker");
    }
}
