// ============================================================================
// Evaluator
// Computes n1 op1 (n2 op2 n3) op3 n4 with bracket-aware precedence
// ============================================================================

use crate::domain::{
    Associativity, CalculationResult, CalculatorConfig, EvaluationTrace, Operator, Stage,
};
use crate::engine::range::RangeValidator;
use crate::engine::rounder::Rounder;
use crate::numeric::ExactDecimal;

/// Evaluates the fixed four-operand expression shape.
///
/// The bracket `n2 op2 n3` is always computed first. A trailing `*` or `/`
/// then takes the bracket before a leading `+` or `-` is applied; in every
/// other combination the expression runs left to right:
///
/// ```text
/// op3 high, op1 low:   n1 op1 ((n2 op2 n3) op3 n4)
/// otherwise:           (n1 op1 (n2 op2 n3)) op3 n4
/// ```
///
/// Only `op1` and `op3` take part in the decision. Every step is rounded
/// to the intermediate scale and range-checked.
#[derive(Clone)]
pub struct Evaluator {
    division_scale: u32,
    rounder: Rounder,
    range: RangeValidator,
}

impl Evaluator {
    pub fn new(division_scale: u32, rounder: Rounder, range: RangeValidator) -> Self {
        Self {
            division_scale,
            rounder,
            range,
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(
            config.division_scale,
            Rounder::new(config.intermediate_scale),
            RangeValidator::from_config(config),
        )
    }

    /// Decide the evaluation order for the outer operators
    pub fn resolve_associativity(op1: Operator, op3: Operator) -> Associativity {
        if op3.is_high_priority() && !op1.is_high_priority() {
            Associativity::BracketFirst
        } else {
            Associativity::LeftToRight
        }
    }

    /// Evaluate `n1 op1 (n2 op2 n3) op3 n4`.
    ///
    /// # Errors
    /// - `Arithmetic` on division by zero
    /// - `OutOfRange` naming the first stage whose value leaves the range
    pub fn evaluate(
        &self,
        operands: &[ExactDecimal; 4],
        operators: [Operator; 3],
    ) -> CalculationResult<EvaluationTrace> {
        let [n1, n2, n3, n4] = operands;
        let [op1, op2, op3] = operators;

        let bracket = self.step(n2, op2, n3, Stage::Bracket)?;

        let associativity = Self::resolve_associativity(op1, op3);
        let (intermediate, result) = match associativity {
            Associativity::BracketFirst => {
                let right = self.step(&bracket, op3, n4, Stage::RightPart)?;
                let result = self.step(n1, op1, &right, Stage::Final)?;
                (right, result)
            },
            Associativity::LeftToRight => {
                let left = self.step(n1, op1, &bracket, Stage::LeftPart)?;
                let result = self.step(&left, op3, n4, Stage::Final)?;
                (left, result)
            },
        };

        Ok(EvaluationTrace {
            bracket,
            associativity,
            intermediate,
            result,
        })
    }

    /// One binary operation: apply, round to the intermediate scale, validate.
    fn step(
        &self,
        lhs: &ExactDecimal,
        op: Operator,
        rhs: &ExactDecimal,
        stage: Stage,
    ) -> CalculationResult<ExactDecimal> {
        let raw = op.apply(lhs, rhs, self.division_scale)?;
        let rounded = self.rounder.round_intermediate(Some(&raw));
        tracing::debug!("{}: {} {} {} = {}", stage.label(), lhs, op, rhs, rounded);

        self.range.validate(&rounded, stage.label())?;
        Ok(rounded)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalculationError, ErrorKind};
    use crate::numeric::NumericError;
    use crate::domain::Operator::{Add, Divide, Multiply, Subtract};

    fn dec(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    fn operands(values: [&str; 4]) -> [ExactDecimal; 4] {
        values.map(dec)
    }

    fn eval(values: [&str; 4], ops: [Operator; 3]) -> CalculationResult<EvaluationTrace> {
        Evaluator::default().evaluate(&operands(values), ops)
    }

    #[test]
    fn test_trailing_multiply_pulls_bracket_in() {
        // 1 + (2 + 3) * 4 -> 1 + (5 * 4) = 21
        let trace = eval(["1", "2", "3", "4"], [Add, Add, Multiply]).unwrap();
        assert_eq!(trace.bracket, dec("5"));
        assert_eq!(trace.associativity, Associativity::BracketFirst);
        assert_eq!(trace.intermediate, dec("20"));
        assert_eq!(trace.result, dec("21"));
        assert_eq!(trace.intermediate_stage(), Stage::RightPart);
    }

    #[test]
    fn test_leading_multiply_runs_left_to_right() {
        // 2 * (1 + 1) + 1 -> (2 * 2) + 1 = 5
        let trace = eval(["2", "1", "1", "1"], [Multiply, Add, Add]).unwrap();
        assert_eq!(trace.bracket, dec("2"));
        assert_eq!(trace.associativity, Associativity::LeftToRight);
        assert_eq!(trace.intermediate, dec("4"));
        assert_eq!(trace.result, dec("5"));
        assert_eq!(trace.intermediate_stage(), Stage::LeftPart);
    }

    #[test]
    fn test_both_high_priority_is_left_to_right() {
        // 8 / (1 + 1) * 3 -> (8 / 2) * 3 = 12
        let trace = eval(["8", "1", "1", "3"], [Divide, Add, Multiply]).unwrap();
        assert_eq!(trace.associativity, Associativity::LeftToRight);
        assert_eq!(trace.result, dec("12"));
    }

    #[test]
    fn test_subtract_then_divide() {
        // 10 - (4 + 2) / 3 -> 10 - 2 = 8
        let trace = eval(["10", "4", "2", "3"], [Subtract, Add, Divide]).unwrap();
        assert_eq!(trace.associativity, Associativity::BracketFirst);
        assert_eq!(trace.result, dec("8"));
    }

    #[test]
    fn test_bracket_operator_does_not_affect_order() {
        // op2 is high priority but only op1/op3 are compared
        assert_eq!(
            Evaluator::resolve_associativity(Add, Add),
            Associativity::LeftToRight
        );
        let trace = eval(["1", "2", "3", "4"], [Add, Multiply, Add]).unwrap();
        assert_eq!(trace.associativity, Associativity::LeftToRight);
        assert_eq!(trace.result, dec("11"));
    }

    #[test]
    fn test_all_defaults_evaluate_to_zero() {
        let trace = eval(["0", "0", "0", "0"], [Add, Add, Add]).unwrap();
        assert!(trace.result.is_zero());
        assert_eq!(trace.result.scale(), 10);
    }

    #[test]
    fn test_division_scale_then_intermediate_rounding() {
        // (1 / 3) at scale 6, then carried at scale 10
        let trace = eval(["0", "1", "3", "0"], [Add, Divide, Add]).unwrap();
        assert_eq!(trace.bracket.to_string(), "0.3333330000");
        assert_eq!(trace.result.to_string(), "0.3333330000");
    }

    #[test]
    fn test_multiplication_rounded_to_intermediate_scale() {
        // 0.0000000001 * 0.5 = 0.00000000005 -> 0.0000000001 (half-up)
        let trace = eval(["0", "0.0000000001", "0.5", "0"], [Add, Multiply, Add]).unwrap();
        assert_eq!(trace.bracket.to_string(), "0.0000000001");
    }

    #[test]
    fn test_division_by_zero_anywhere() {
        let cases = [
            (["0", "5", "0", "0"], [Add, Divide, Add]),
            (["0", "-5", "0", "0"], [Add, Divide, Add]),
            (["0", "0", "0", "0"], [Add, Divide, Add]),
            (["1", "2", "3", "0"], [Add, Add, Divide]),
            (["1", "0", "0", "1"], [Divide, Add, Add]),
        ];

        for (values, ops) in cases {
            let err = eval(values, ops).unwrap_err();
            assert_eq!(err, CalculationError::Arithmetic(NumericError::DivisionByZero));
            assert_eq!(err.kind(), ErrorKind::Arithmetic);
        }
    }

    #[test]
    fn test_range_error_names_stage() {
        // 999999999999.9 + (999999999999.9 + 0) + 0 overflows the left part
        let err = eval(["999999999999.9", "999999999999.9", "0", "0"], [Add, Add, Add])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.field(), Some("Intermediate result (left part)"));

        let err = eval(["0", "999999999999.9", "999999999999.9", "0"], [Add, Add, Add])
            .unwrap_err();
        assert_eq!(err.field(), Some("Bracket result"));

        let err = eval(["0", "1000000", "1", "1000000"], [Add, Add, Multiply]).unwrap_err();
        assert_eq!(err.field(), Some("Intermediate result (right part)"));

        let err = eval(["999999999999", "1", "1", "2"], [Add, Subtract, Add]).unwrap_err();
        assert_eq!(err.field(), Some("Final result"));
    }
}
