use std::fmt::Display;
use std::fmt::Formatter;

/// The doping allegation group of a rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Allegation,
    NoAllegation,
}

impl Category {
    /// Both categories, in legend order.
    pub const ALL: [Category; 2] = [Category::Allegation, Category::NoAllegation];

    pub fn of(doping_allegation: &str) -> Category {
        if doping_allegation.is_empty() {
            Category::NoAllegation
        } else {
            Category::Allegation
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Allegation => "Riders with doping allegations",
            Category::NoAllegation => "No doping allegations",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
