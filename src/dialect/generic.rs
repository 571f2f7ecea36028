use crate::dialect::traits::SqlGenerator;

/// ANSI-ish default generator; every primitive keeps its trait default.
pub struct GenericGenerator;

impl GenericGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SqlGenerator for GenericGenerator {}
