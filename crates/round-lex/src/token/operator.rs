//! Operator definitions.
//!
//! Operators form a closed enumeration. Each variant carries its raw symbol,
//! an optional alias usable as a function name, a binding priority (higher
//! binds tighter) and an associativity. None of these change at runtime.

use std::fmt;

/// Associativity of a binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`
    Left,
    /// `a = b = c` groups as `a = (b = c)`
    Right,
}

/// Operator tokens recognized by the scanner.
///
/// # Example
///
/// ```
/// use round_lex::Operator;
///
/// assert_eq!(Operator::Mul.symbol(), "*");
/// assert!(Operator::Mul.priority() > Operator::Add.priority());
/// assert_eq!(Operator::from_alias("and"), Some(Operator::And));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Assign,
    /// `||`
    Or,
    /// `&&`
    And,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UShr,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `**`
    Pow,
    /// `!`
    Not,
    /// `~`
    BitNot,
    /// `->`
    Arrow,
    /// `.`
    Dot,
    /// `..`
    DoubleDot,
    /// `...`
    TripleDot,
    /// `[]`, built by parsers for index expressions; never scanned.
    Index,
}

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 28] = [
        Operator::Assign,
        Operator::Or,
        Operator::And,
        Operator::BitOr,
        Operator::BitXor,
        Operator::BitAnd,
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Ge,
        Operator::Lt,
        Operator::Le,
        Operator::Shl,
        Operator::Shr,
        Operator::UShr,
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem,
        Operator::Pow,
        Operator::Not,
        Operator::BitNot,
        Operator::Arrow,
        Operator::Dot,
        Operator::DoubleDot,
        Operator::TripleDot,
        Operator::Index,
    ];

    /// Raw source symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::Or => "||",
            Operator::And => "&&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::BitAnd => "&",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::UShr => ">>>",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Pow => "**",
            Operator::Not => "!",
            Operator::BitNot => "~",
            Operator::Arrow => "->",
            Operator::Dot => ".",
            Operator::DoubleDot => "..",
            Operator::TripleDot => "...",
            Operator::Index => "[]",
        }
    }

    /// Alias usable as a function name, e.g. `and` for `&&`.
    pub const fn alias(self) -> Option<&'static str> {
        match self {
            Operator::Or => Some("or"),
            Operator::And => Some("and"),
            Operator::Eq => Some("eq"),
            Operator::Ne => Some("ne"),
            Operator::Gt => Some("gt"),
            Operator::Ge => Some("ge"),
            Operator::Lt => Some("lt"),
            Operator::Le => Some("le"),
            Operator::Not => Some("not"),
            _ => None,
        }
    }

    /// Binding priority; higher binds tighter.
    pub const fn priority(self) -> u8 {
        match self {
            Operator::Assign => 1,
            Operator::Or => 2,
            Operator::And => 3,
            Operator::BitOr => 4,
            Operator::BitXor => 5,
            Operator::BitAnd => 6,
            Operator::Eq | Operator::Ne => 7,
            Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le => 8,
            Operator::Shl | Operator::Shr | Operator::UShr => 9,
            Operator::Add | Operator::Sub => 10,
            Operator::Mul | Operator::Div | Operator::Rem => 11,
            Operator::Pow => 12,
            Operator::Not | Operator::BitNot => 13,
            Operator::Arrow
            | Operator::Dot
            | Operator::DoubleDot
            | Operator::TripleDot
            | Operator::Index => 14,
        }
    }

    /// Associativity of the operator.
    pub const fn associativity(self) -> Associativity {
        match self {
            Operator::Assign | Operator::Pow | Operator::Not | Operator::BitNot => {
                Associativity::Right
            },
            _ => Associativity::Left,
        }
    }

    /// Returns true for left-associative operators.
    pub const fn is_left_assoc(self) -> bool {
        matches!(self.associativity(), Associativity::Left)
    }

    /// Returns true for right-associative operators.
    pub const fn is_right_assoc(self) -> bool {
        !self.is_left_assoc()
    }

    /// Does `self`, standing to the left of `other`, bind at least as
    /// tightly as `other`?
    ///
    /// Precedence-climbing parsers call this to decide whether to reduce
    /// the pending left operator before shifting the right one. On equal
    /// priority the answer is the left operator's associativity.
    ///
    /// # Example
    ///
    /// ```
    /// use round_lex::Operator;
    ///
    /// // `a * b + c` reduces `a * b` first
    /// assert!(Operator::Mul.compare_priority(Operator::Add));
    /// // `a - b - c` reduces `a - b` first
    /// assert!(Operator::Sub.compare_priority(Operator::Sub));
    /// // `a ** b ** c` waits for `b ** c`
    /// assert!(!Operator::Pow.compare_priority(Operator::Pow));
    /// ```
    pub const fn compare_priority(self, other: Operator) -> bool {
        let (left, right) = (self.priority(), other.priority());
        if left != right {
            left > right
        } else {
            self.is_left_assoc()
        }
    }

    /// Returns true for `&&` and `||`.
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// Returns true for `.`
    pub const fn is_dot(self) -> bool {
        matches!(self, Operator::Dot)
    }

    /// Look up an operator by its function-name alias.
    pub fn from_alias(alias: &str) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.alias() == Some(alias))
    }

    /// Look up an operator by its exact symbol.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
