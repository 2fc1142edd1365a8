//! Service branches used to colour and filter points of interest.
//!
//! The enum offers compile-time exhaustiveness instead of string comparison.
//!
//! # Examples
//! ```
//! use poimap_core::Category;
//!
//! assert_eq!(Category::Navy.as_str(), "navy");
//! assert_eq!(Category::Air.to_string(), "air");
//! assert_eq!(Category::default(), Category::Army);
//! ```

/// Service branch of an installation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Category {
    /// Land forces.
    #[default]
    Army,
    /// Naval forces.
    Navy,
    /// Air and space forces.
    Air,
    /// Special forces.
    Special,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 4] = [Self::Army, Self::Navy, Self::Air, Self::Special];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use poimap_core::Category;
    ///
    /// assert_eq!(Category::Special.as_str(), "special");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Army => "army",
            Self::Navy => "navy",
            Self::Air => "air",
            Self::Special => "special",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "army" => Ok(Self::Army),
            "navy" => Ok(Self::Navy),
            "air" => Ok(Self::Air),
            "special" => Ok(Self::Special),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}
