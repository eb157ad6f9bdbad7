//! Expression processing API
//!
//! This module provides the pipeline the CLI drives: one expression in,
//! one serialized artifact out, selected by a processing specification of
//! a stage (what data to extract: tokens, AST, or diagram) and a format
//! (how to serialize it). Specifications are written as "stage-format"
//! strings such as `token-simple`, `ast-treeviz` or `diagram-svg`.

use crate::boolex::layout::{layout_diagram, to_svg};
use crate::boolex::lexer::tokenize;
use crate::boolex::parser::{parse_expression, to_treeviz_str, SyntaxError};
use std::fmt;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Diagram,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Infix,
    Treeviz,
    Svg,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "diagram-svg"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let parts: Vec<&str> = format_str.split('-').collect();
        if parts.len() < 2 {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        }

        let stage = match parts[0] {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "diagram" => ProcessingStage::Diagram,
            _ => return Err(ProcessingError::InvalidStage(parts[0].to_string())),
        };

        let format = match parts[1..].join("-").as_str() {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "infix" => OutputFormat::Infix,
            "treeviz" => OutputFormat::Treeviz,
            "svg" => OutputFormat::Svg,
            _ => return Err(ProcessingError::InvalidFormatType(parts[1..].join("-"))),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Simple | OutputFormat::Json) => {}
            (ProcessingStage::Token, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for token stage (only 'simple' and 'json')",
                    format
                )))
            }
            (
                ProcessingStage::Ast,
                OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Infix | OutputFormat::Treeviz,
            ) => {}
            (ProcessingStage::Ast, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for ast stage (only 'json', 'yaml', 'infix' and 'treeviz')",
                    format
                )))
            }
            (ProcessingStage::Diagram, OutputFormat::Json | OutputFormat::Svg) => {}
            (ProcessingStage::Diagram, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for diagram stage (only 'json' and 'svg')",
                    format
                )))
            }
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Yaml,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Infix,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Treeviz,
            },
            ProcessingSpec {
                stage: ProcessingStage::Diagram,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Diagram,
                format: OutputFormat::Svg,
            },
        ]
    }

    /// The "stage-format" string for this specification
    pub fn to_format_string(&self) -> String {
        format!(
            "{}-{}",
            match self.stage {
                ProcessingStage::Token => "token",
                ProcessingStage::Ast => "ast",
                ProcessingStage::Diagram => "diagram",
            },
            match self.format {
                OutputFormat::Simple => "simple",
                OutputFormat::Json => "json",
                OutputFormat::Yaml => "yaml",
                OutputFormat::Infix => "infix",
                OutputFormat::Treeviz => "treeviz",
                OutputFormat::Svg => "svg",
            }
        )
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    Syntax(SyntaxError),
    Serialize(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::Syntax(err) => write!(f, "Invalid Boolean Expression: {}", err),
            ProcessingError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl From<SyntaxError> for ProcessingError {
    fn from(err: SyntaxError) -> Self {
        ProcessingError::Syntax(err)
    }
}

/// Process an expression according to the given specification
pub fn process_expression(
    source: &str,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let tokens = tokenize(source);

    match spec.stage {
        ProcessingStage::Token => match spec.format {
            OutputFormat::Json => serde_json::to_string_pretty(&tokens)
                .map_err(|e| ProcessingError::Serialize(e.to_string())),
            _ => {
                let mut result = String::new();
                for token in &tokens {
                    result.push_str(&format!("<{}:{}>", token.kind(), token));
                }
                Ok(result)
            }
        },
        ProcessingStage::Ast => {
            let expr = parse_expression(tokens)?;
            match spec.format {
                OutputFormat::Json => serde_json::to_string_pretty(&expr)
                    .map_err(|e| ProcessingError::Serialize(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&expr)
                    .map_err(|e| ProcessingError::Serialize(e.to_string())),
                OutputFormat::Treeviz => Ok(to_treeviz_str(&expr)),
                _ => Ok(format!("{}\n", expr)),
            }
        }
        ProcessingStage::Diagram => {
            let expr = parse_expression(tokens)?;
            let diagram = layout_diagram(&expr);
            match spec.format {
                OutputFormat::Json => serde_json::to_string_pretty(&diagram)
                    .map_err(|e| ProcessingError::Serialize(e.to_string())),
                _ => Ok(to_svg(&diagram)),
            }
        }
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.to_format_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_spec_parsing() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Token);
        assert_eq!(spec.format, OutputFormat::Simple);

        let spec = ProcessingSpec::from_string("diagram-svg").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Diagram);
        assert_eq!(spec.format, OutputFormat::Svg);

        assert!(ProcessingSpec::from_string("invalid").is_err());
        assert!(ProcessingSpec::from_string("token-invalid").is_err());
        assert!(ProcessingSpec::from_string("invalid-simple").is_err());
    }

    #[test]
    fn test_stage_format_compatibility() {
        assert!(ProcessingSpec::from_string("token-svg").is_err());
        assert!(ProcessingSpec::from_string("token-treeviz").is_err());
        assert!(ProcessingSpec::from_string("ast-svg").is_err());
        assert!(ProcessingSpec::from_string("ast-simple").is_err());
        assert!(ProcessingSpec::from_string("diagram-simple").is_err());
        assert!(ProcessingSpec::from_string("diagram-infix").is_err());
    }

    #[test]
    fn test_every_available_format_round_trips() {
        for format in available_formats() {
            let spec = ProcessingSpec::from_string(&format).unwrap();
            assert_eq!(spec.to_format_string(), format);
        }
    }

    #[test]
    fn test_token_simple_output() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let output = process_expression("A AND (b)", &spec).unwrap();
        assert_eq!(
            output,
            "<literal:A><operator:AND><paren:(><literal:B><paren:)>"
        );
    }

    #[test]
    fn test_token_json_output() {
        let spec = ProcessingSpec::from_string("token-json").unwrap();
        let output = process_expression("A AND B", &spec).unwrap();
        assert!(output.contains("\"And\""));
        assert!(output.contains("\"Literal\""));
    }

    #[test]
    fn test_ast_infix_output() {
        let spec = ProcessingSpec::from_string("ast-infix").unwrap();
        let output = process_expression("NOT A AND B", &spec).unwrap();
        assert_eq!(output, "((NOT A) AND B)\n");
    }

    #[test]
    fn test_ast_treeviz_output() {
        let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
        let output = process_expression("A AND B", &spec).unwrap();
        assert_eq!(output, "└─ Gate: AND\n  ├─ Literal: A\n  └─ Literal: B\n");
    }

    #[test]
    fn test_diagram_svg_output() {
        let spec = ProcessingSpec::from_string("diagram-svg").unwrap();
        let output = process_expression("A XOR B", &spec).unwrap();
        assert!(output.starts_with("<svg "));
        assert!(output.contains("OUTPUT"));
    }

    #[test]
    fn test_parse_failure_propagates() {
        let spec = ProcessingSpec::from_string("ast-json").unwrap();
        let err = process_expression("A AND", &spec).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Boolean Expression: Unexpected end of expression"
        );
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert!(formats.contains(&"token-simple".to_string()));
        assert!(formats.contains(&"ast-treeviz".to_string()));
        assert!(formats.contains(&"diagram-svg".to_string()));
        assert_eq!(formats.len(), 8);
    }
}
