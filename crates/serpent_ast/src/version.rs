//! Language version values.
//!
//! The version gates which syntactic variants a tree may contain (`exec`
//! statements, sublist parameters, `nonlocal`, annotations). It does not
//! change how names resolve.

use std::fmt;

/// A Python language version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PythonVersion {
    V26,
    V27,
    V30,
    V31,
    V32,
    V33,
    V34,
    V35,
    V36,
    V37,
}

impl PythonVersion {
    #[inline]
    pub fn is_2x(self) -> bool {
        matches!(self, PythonVersion::V26 | PythonVersion::V27)
    }

    #[inline]
    pub fn is_3x(self) -> bool {
        !self.is_2x()
    }

    /// `nonlocal` declarations exist from 3.0 on.
    #[inline]
    pub fn supports_nonlocal(self) -> bool {
        self.is_3x()
    }

    /// The `exec` statement form exists only in 2.x; in 3.x `exec` is a
    /// plain builtin call.
    #[inline]
    pub fn supports_exec_statement(self) -> bool {
        self.is_2x()
    }

    /// Sublist (nested tuple) parameters exist only in 2.x.
    #[inline]
    pub fn supports_sublist_parameters(self) -> bool {
        self.is_2x()
    }

    /// Parameter and return annotations exist from 3.0 on.
    #[inline]
    pub fn supports_annotations(self) -> bool {
        self.is_3x()
    }

    /// Extended iterable unpacking (`a, *rest = ...`) exists from 3.0 on.
    #[inline]
    pub fn supports_starred_assignment(self) -> bool {
        self.is_3x()
    }
}

impl Default for PythonVersion {
    fn default() -> Self {
        PythonVersion::V37
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PythonVersion::V26 => "2.6",
            PythonVersion::V27 => "2.7",
            PythonVersion::V30 => "3.0",
            PythonVersion::V31 => "3.1",
            PythonVersion::V32 => "3.2",
            PythonVersion::V33 => "3.3",
            PythonVersion::V34 => "3.4",
            PythonVersion::V35 => "3.5",
            PythonVersion::V36 => "3.6",
            PythonVersion::V37 => "3.7",
        };
        write!(f, "{}", s)
    }
}
