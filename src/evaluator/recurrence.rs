//! Recorrências suportadas pelo avaliador.
//!
//! Cada recorrência descreve seus casos base, os subproblemas de um `n`
//! e como combinar os resultados deles. O motor cuida de memoização,
//! profundidade e overflow.

use crate::types::problem::ProblemKind;

/// Trait para recorrências sobre `n >= 0`.
pub trait Recurrence: Send + Sync {
    /// Tipo de problema que esta recorrência resolve.
    fn kind(&self) -> ProblemKind;

    /// Valor do caso base, ou `None` se `n` não é caso base.
    fn base(&self, n: u64) -> Option<u128>;

    /// Subproblemas de `n`, na ordem em que devem ser resolvidos.
    fn subproblems(&self, n: u64) -> Vec<u64>;

    /// Combina os resultados dos subproblemas (mesma ordem de `subproblems`).
    ///
    /// Retorna `None` em caso de overflow.
    fn combine(&self, n: u64, parts: &[u128]) -> Option<u128>;

    /// Altura da árvore de chamadas ingênua abaixo de `n` (a raiz conta 0).
    fn height(&self, n: u64) -> u64;

    /// Menor `n` cujo valor não cabe em `u128`, se houver.
    ///
    /// Todo `n` a partir dele também estoura, então o motor pode responder
    /// sem descer a recursão.
    fn overflows_from(&self) -> Option<u64> {
        None
    }
}

/// `n! = n * (n-1)!`, com `0! = 1! = 1`.
#[derive(Debug, Clone, Default)]
pub struct Factorial;

impl Recurrence for Factorial {
    fn kind(&self) -> ProblemKind {
        ProblemKind::Factorial
    }

    fn base(&self, n: u64) -> Option<u128> {
        (n <= 1).then_some(1)
    }

    fn subproblems(&self, n: u64) -> Vec<u64> {
        vec![n - 1]
    }

    fn combine(&self, n: u64, parts: &[u128]) -> Option<u128> {
        parts
            .iter()
            .try_fold(u128::from(n), |acc, part| acc.checked_mul(*part))
    }

    fn height(&self, n: u64) -> u64 {
        n.saturating_sub(1)
    }

    fn overflows_from(&self) -> Option<u64> {
        // 34! cabe em u128, 35! não
        Some(35)
    }
}

/// `F(n) = F(n-1) + F(n-2)`, com `F(0) = 0` e `F(1) = 1`.
#[derive(Debug, Clone, Default)]
pub struct Fibonacci;

impl Recurrence for Fibonacci {
    fn kind(&self) -> ProblemKind {
        ProblemKind::Fibonacci
    }

    fn base(&self, n: u64) -> Option<u128> {
        (n <= 1).then_some(u128::from(n))
    }

    fn subproblems(&self, n: u64) -> Vec<u64> {
        // n-1 primeiro: ao terminar, n-2 já está na tabela
        vec![n - 1, n - 2]
    }

    fn combine(&self, _n: u64, parts: &[u128]) -> Option<u128> {
        parts.iter().try_fold(0u128, |acc, part| acc.checked_add(*part))
    }

    fn height(&self, n: u64) -> u64 {
        // o ramo n-1 é o mais fundo
        n.saturating_sub(1)
    }

    fn overflows_from(&self) -> Option<u64> {
        // F(186) cabe em u128, F(187) não
        Some(187)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_base_cases() {
        let rec = Factorial;
        assert_eq!(rec.base(0), Some(1));
        assert_eq!(rec.base(1), Some(1));
        assert_eq!(rec.base(2), None);
    }

    #[test]
    fn test_factorial_combine() {
        let rec = Factorial;
        assert_eq!(rec.subproblems(5), vec![4]);
        assert_eq!(rec.combine(5, &[24]), Some(120));
        assert_eq!(rec.combine(2, &[u128::MAX]), None);
    }

    #[test]
    fn test_fibonacci_base_cases() {
        let rec = Fibonacci;
        assert_eq!(rec.base(0), Some(0));
        assert_eq!(rec.base(1), Some(1));
        assert_eq!(rec.base(2), None);
    }

    #[test]
    fn test_fibonacci_combine() {
        let rec = Fibonacci;
        assert_eq!(rec.subproblems(10), vec![9, 8]);
        assert_eq!(rec.combine(10, &[34, 21]), Some(55));
        assert_eq!(rec.combine(10, &[u128::MAX, 1]), None);
    }

    #[test]
    fn test_heights() {
        assert_eq!(Factorial.height(0), 0);
        assert_eq!(Factorial.height(1), 0);
        assert_eq!(Factorial.height(12), 11);
        assert_eq!(Fibonacci.height(0), 0);
        assert_eq!(Fibonacci.height(10), 9);
        assert_eq!(Factorial.height(u64::MAX), u64::MAX - 1);
    }

    #[test]
    fn test_overflow_thresholds_match_combine() {
        // 34! é o último valor representável
        let mut fact: u128 = 1;
        for n in 2..=34u64 {
            fact = Factorial.combine(n, &[fact]).unwrap();
        }
        assert_eq!(Factorial.combine(35, &[fact]), None);
        assert_eq!(Factorial.overflows_from(), Some(35));

        let (mut prev, mut cur): (u128, u128) = (0, 1);
        for n in 2..=186u64 {
            let next = Fibonacci.combine(n, &[cur, prev]).unwrap();
            prev = cur;
            cur = next;
        }
        assert_eq!(Fibonacci.combine(187, &[cur, prev]), None);
        assert_eq!(Fibonacci.overflows_from(), Some(187));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Factorial.kind(), ProblemKind::Factorial);
        assert_eq!(Fibonacci.kind(), ProblemKind::Fibonacci);
    }
}
