pub struct Country {
}

impl Country {
    /// Returns the code NANPA uses for area codes assigned to the United
    /// States and its territories.
    pub fn us() -> &'static str {
        return "US";
    }

    pub fn ca() -> &'static str {
        return "CA";
    }

    pub fn bs() -> &'static str {
        return "BS";
    }

    pub fn jm() -> &'static str {
        return "JM";
    }
}
