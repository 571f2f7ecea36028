pub mod builders;
pub mod expr;
pub mod select;

pub use self::expr::{CaseWhen, Expr, FunctionCall, ScalarValue};
pub use self::select::{
    ColumnItem, ColumnSpec, GroupSpec, Join, JoinKind, LimitSpec, LimitValue, OrderDirection,
    OrderItem, OrderSpec, Predicate, Select, TableSpec,
};
