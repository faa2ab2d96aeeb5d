// ============================================================================
// Calculator
// Request-level pipeline: parse -> evaluate -> round -> format
// ============================================================================

use crate::domain::{
    CalculationError, CalculationResult, CalculatorConfig, Evaluation, EvaluationRequest,
    EvaluationResult, Stage,
};
use crate::engine::evaluator::Evaluator;
use crate::engine::formatter::Formatter;
use crate::engine::number_parser::NumberParser;
use crate::engine::range::RangeValidator;
use crate::engine::rounder::Rounder;
use crate::interfaces::{EvaluationEvent, EventHandler};
use crate::numeric::ExactDecimal;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Names used for the four operands in messages
pub const OPERAND_FIELDS: [&str; 4] = [
    "First number",
    "Second number",
    "Third number",
    "Fourth number",
];

/// Four-operand decimal calculator
///
/// Holds only immutable configuration and a shared event handler, so one
/// instance can serve concurrent requests without locking.
pub struct Calculator {
    config: CalculatorConfig,
    parser: NumberParser,
    evaluator: Evaluator,
    rounder: Rounder,
    formatter: Formatter,
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new calculator. The configuration is assumed valid; use
    /// [`crate::engine::create_from_config`] to validate first.
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self::with_rounder(
            Rounder::new(config.intermediate_scale),
            config,
            event_handler,
        )
    }

    /// Create a calculator with a custom rounder (e.g. replaced strategies)
    pub fn with_rounder(
        rounder: Rounder,
        config: CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        let parser = NumberParser::from_config(&config);
        let evaluator = Evaluator::new(
            config.division_scale,
            rounder.clone(),
            RangeValidator::from_config(&config),
        );
        let formatter = Formatter::from_config(&config);

        Self {
            config,
            parser,
            evaluator,
            rounder,
            formatter,
            event_handler,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn parser(&self) -> &NumberParser {
        &self.parser
    }

    pub fn rounder(&self) -> &Rounder {
        &self.rounder
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Evaluate a request and render both display strings.
    ///
    /// Never panics and never returns both a value and an error.
    pub fn calculate(&self, request: &EvaluationRequest) -> EvaluationResult {
        match self.evaluate(request) {
            Ok(evaluation) => EvaluationResult::Success {
                result: self.formatter.format(&evaluation.raw),
                rounded_result: self.formatter.format(&evaluation.rounded),
            },
            Err(err) => EvaluationResult::from(err),
        }
    }

    /// Evaluate straight from boundary tags (`"+"`, `"BANKERS"`, ...).
    ///
    /// Blank tags take their defaults; unknown tags produce a failure result.
    pub fn calculate_tags(
        &self,
        numbers: [&str; 4],
        operators: [&str; 3],
        rounding: &str,
    ) -> EvaluationResult {
        match EvaluationRequest::from_tags(numbers, operators, rounding) {
            Ok(request) => self.calculate(&request),
            Err(err) => {
                let evaluation_id = Uuid::new_v4();
                tracing::warn!("Evaluation {} rejected: {}", evaluation_id, err);
                self.event_handler
                    .on_event(Self::rejected(evaluation_id, &err));
                EvaluationResult::from(err)
            },
        }
    }

    /// JSON boundary: camelCase request body in, `EvaluationResult` JSON out.
    ///
    /// A body that does not deserialize yields a failure result.
    #[cfg(feature = "serde")]
    pub fn calculate_json(&self, body: &str) -> String {
        let result = match serde_json::from_str::<EvaluationRequest>(body) {
            Ok(request) => self.calculate(&request),
            Err(err) => {
                tracing::warn!("Malformed evaluation request: {}", err);
                EvaluationResult::Failure {
                    error: format!("Invalid request: {}", err),
                }
            },
        };

        serde_json::to_string(&result)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize result"}"#.to_string())
    }

    /// Evaluate a request, returning exact values and the stage trace.
    ///
    /// # Errors
    /// Returns the first validation, range or arithmetic error encountered.
    pub fn evaluate(&self, request: &EvaluationRequest) -> CalculationResult<Evaluation> {
        let evaluation_id = Uuid::new_v4();
        let mut events = vec![EvaluationEvent::EvaluationReceived {
            evaluation_id,
            expression: request.expression(),
            timestamp: Utc::now(),
        }];

        let outcome = self.run(evaluation_id, request, &mut events);

        match &outcome {
            Ok(evaluation) => {
                tracing::debug!(
                    "Evaluation {} completed: {} -> {} ({})",
                    evaluation_id,
                    evaluation.raw,
                    evaluation.rounded,
                    evaluation.policy
                );
                events.push(EvaluationEvent::EvaluationCompleted {
                    evaluation_id,
                    result: evaluation.raw.clone(),
                    rounded: evaluation.rounded.clone(),
                    policy: evaluation.policy,
                    timestamp: Utc::now(),
                });
            },
            Err(err) => {
                tracing::warn!("Evaluation {} rejected: {}", evaluation_id, err);
                events.push(Self::rejected(evaluation_id, err));
            },
        }

        self.event_handler.on_events(events);
        outcome
    }

    fn run(
        &self,
        evaluation_id: Uuid,
        request: &EvaluationRequest,
        events: &mut Vec<EvaluationEvent>,
    ) -> CalculationResult<Evaluation> {
        let raw_numbers = request.numbers();
        let mut operands: [ExactDecimal; 4] = Default::default();

        for ((slot, raw), field) in operands.iter_mut().zip(raw_numbers).zip(OPERAND_FIELDS) {
            *slot = self.parser.parse(raw, field)?;
            events.push(EvaluationEvent::OperandParsed {
                evaluation_id,
                field: field.to_string(),
                value: slot.clone(),
                timestamp: Utc::now(),
            });
        }

        let trace = self.evaluator.evaluate(&operands, request.operators())?;

        for (stage, value) in [
            (Stage::Bracket, &trace.bracket),
            (trace.intermediate_stage(), &trace.intermediate),
            (Stage::Final, &trace.result),
        ] {
            events.push(EvaluationEvent::StageComputed {
                evaluation_id,
                stage,
                value: value.clone(),
                timestamp: Utc::now(),
            });
        }

        let policy = request.rounding_policy();
        let rounded = self.rounder.round_final(&trace.result, policy);

        Ok(Evaluation {
            raw: trace.result.clone(),
            rounded,
            policy,
            trace,
        })
    }

    fn rejected(evaluation_id: Uuid, err: &CalculationError) -> EvaluationEvent {
        EvaluationEvent::EvaluationRejected {
            evaluation_id,
            kind: err.kind(),
            reason: err.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, Operator, RoundingPolicy};
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};

    fn calculator() -> Calculator {
        Calculator::new(CalculatorConfig::standard(), Arc::new(NoOpEventHandler))
    }

    fn dec(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_precedence_examples() {
        let calc = calculator();

        let result = calc.calculate_tags(["1", "2", "3", "4"], ["+", "+", "*"], "MATHEMATICAL");
        assert_eq!(result.result(), Some("21"));
        assert_eq!(result.rounded_result(), Some("21"));

        let result = calc.calculate_tags(["2", "1", "1", "1"], ["*", "+", "+"], "MATHEMATICAL");
        assert_eq!(result.result(), Some("5"));
    }

    #[test]
    fn test_rounding_policies_on_result() {
        let calc = calculator();
        // 0 + (5 / 2) + 0 = 2.5
        let numbers = ["0", "5", "2", "0"];
        let ops = ["+", "/", "+"];

        let math = calc.calculate_tags(numbers, ops, "MATHEMATICAL");
        assert_eq!(math.result(), Some("2.5"));
        assert_eq!(math.rounded_result(), Some("3"));

        let bankers = calc.calculate_tags(numbers, ops, "BANKERS");
        assert_eq!(bankers.rounded_result(), Some("2"));

        let truncate = calc.calculate_tags(["0", "-5", "2", "0"], ops, "TRUNCATE");
        assert_eq!(truncate.result(), Some("-2.5"));
        assert_eq!(truncate.rounded_result(), Some("-2"));
    }

    #[test]
    fn test_blank_request_is_zero() {
        let result = calculator().calculate(&EvaluationRequest::default());
        assert_eq!(result.result(), Some("0"));
        assert_eq!(result.rounded_result(), Some("0"));
    }

    #[test]
    fn test_grouped_input_and_output() {
        let request = EvaluationRequest::new(["986 282 584 876,635029", "", "", ""]);
        let result = calculator().calculate(&request);
        assert_eq!(result.result(), Some("986 282 584 876.635029"));
        assert_eq!(result.rounded_result(), Some("986 282 584 877"));
    }

    #[test]
    fn test_failures_are_messages() {
        let calc = calculator();

        let exp = calc.calculate_tags(["1e5", "", "", ""], ["", "", ""], "");
        assert_eq!(
            exp.error(),
            Some("First number: exponential notation is not supported")
        );

        let zero = calc.calculate_tags(["1", "1", "0", "1"], ["+", "/", "+"], "");
        assert_eq!(zero.error(), Some("Arithmetic error: division by zero"));

        let range = calc.calculate_tags(
            ["999999999999.9", "999999999999.9", "", ""],
            ["+", "+", "+"],
            "",
        );
        let message = range.error().unwrap();
        assert!(message.starts_with("Intermediate result (left part) is outside the allowed range"));

        let unknown = calc.calculate_tags(["1", "2", "3", "4"], ["+", "+", "x"], "");
        assert_eq!(unknown.error(), Some("Unknown operation: x"));
    }

    #[test]
    fn test_evaluate_returns_typed_values() {
        let request = EvaluationRequest::new(["10", "1", "3", "3"])
            .with_operators(Operator::Subtract, Operator::Divide, Operator::Multiply)
            .with_rounding(RoundingPolicy::Bankers);

        // 10 - ((1 / 3) * 3) = 10 - 0.999999 = 9.000001
        let evaluation = calculator().evaluate(&request).unwrap();
        assert_eq!(evaluation.trace.bracket, dec("0.333333"));
        assert_eq!(evaluation.trace.intermediate, dec("0.999999"));
        assert_eq!(evaluation.raw, dec("9.000001"));
        assert_eq!(evaluation.rounded, dec("9"));
        assert_eq!(evaluation.policy, RoundingPolicy::Bankers);
    }

    #[test]
    fn test_events_emitted_in_order() {
        let handler = Arc::new(RecordingEventHandler::new());
        let calc = Calculator::new(CalculatorConfig::standard(), handler.clone());

        calc.calculate_tags(["1", "2", "3", "4"], ["+", "+", "*"], "");
        let events = handler.take();

        // received + 4 operands + 3 stages + completed
        assert_eq!(events.len(), 9);
        let id = events[0].evaluation_id();
        assert!(events.iter().all(|e| e.evaluation_id() == id));
        assert!(matches!(events[0], EvaluationEvent::EvaluationReceived { .. }));
        assert!(matches!(
            events[6],
            EvaluationEvent::StageComputed {
                stage: Stage::RightPart,
                ..
            }
        ));
        assert!(matches!(
            events[8],
            EvaluationEvent::EvaluationCompleted { .. }
        ));
    }

    #[test]
    fn test_rejection_event() {
        let handler = Arc::new(RecordingEventHandler::new());
        let calc = Calculator::new(CalculatorConfig::standard(), handler.clone());

        calc.calculate_tags(["1", "abc", "", ""], ["", "", ""], "");
        let events = handler.take();

        // received + first operand + rejected
        assert_eq!(events.len(), 3);
        match &events[2] {
            EvaluationEvent::EvaluationRejected { kind, reason, .. } => {
                assert_eq!(*kind, ErrorKind::Validation);
                assert_eq!(reason, "Invalid format for second number: abc");
            },
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_calculate_json() {
        let calc = calculator();

        let body = r#"{"number1":"1","number2":"2","number3":"3","number4":"4",
                       "op1":"+","op2":"+","op3":"*","roundingType":"BANKERS"}"#;
        assert_eq!(
            calc.calculate_json(body),
            r#"{"result":"21","roundedResult":"21"}"#
        );

        let failed = calc.calculate_json(r#"{"number1":"1,5.5"}"#);
        assert_eq!(failed, r#"{"error":"Invalid format for first number: 1,5.5"}"#);

        assert!(calc.calculate_json("not json").starts_with(r#"{"error":"Invalid request"#));
    }

    #[test]
    fn test_calculator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Calculator>();
    }
}
