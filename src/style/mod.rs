/// Index into the theme spacing scale.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Spacing(pub u8);

impl Spacing {
    pub const ZERO: Self = Self(0);

    pub const fn units(self) -> u8 {
        self.0
    }
}

impl From<u8> for Spacing {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Size {
    Xs,
    Sm,
    Md,
}
