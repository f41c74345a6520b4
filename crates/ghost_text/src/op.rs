//! Operation requests.
//!
//! Page scripts name operations with strings (`"focus"`, `"updateSettings"`,
//! ...). Names are parsed once, here, into [`OpName`]; everything past this
//! point works with the typed [`GhostOp`].

use crate::error::GhostError;
use crate::options::GhostOptions;
use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
pub enum GhostOp {
    /// Bind the behavior, merging the options over the defaults.
    Attach(GhostOptions),
    /// Shallow-merge into the stored configuration.
    UpdateConfig(GhostOptions),
    FormSubmit,
    Focus,
    Blur,
    Change,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpName {
    Attach,
    UpdateConfig,
    FormSubmit,
    Focus,
    Blur,
    Change,
}

impl OpName {
    pub fn as_str(self) -> &'static str {
        match self {
            OpName::Attach => "init",
            OpName::UpdateConfig => "updateSettings",
            OpName::FormSubmit => "parentFormSubmit",
            OpName::Focus => "focus",
            OpName::Blur => "blur",
            OpName::Change => "change",
        }
    }

    /// Build the request. Only `Attach` and `UpdateConfig` use the argument;
    /// the event operations ignore it.
    pub fn with_arg(self, arg: Option<GhostOptions>) -> GhostOp {
        match self {
            OpName::Attach => GhostOp::Attach(arg.unwrap_or_default()),
            OpName::UpdateConfig => GhostOp::UpdateConfig(arg.unwrap_or_default()),
            OpName::FormSubmit => GhostOp::FormSubmit,
            OpName::Focus => GhostOp::Focus,
            OpName::Blur => GhostOp::Blur,
            OpName::Change => GhostOp::Change,
        }
    }
}

impl fmt::Display for OpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpName {
    type Err = GhostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" | "attach" => Ok(OpName::Attach),
            "updateSettings" | "update_config" => Ok(OpName::UpdateConfig),
            "parentFormSubmit" | "form_submit" => Ok(OpName::FormSubmit),
            "focus" => Ok(OpName::Focus),
            "blur" => Ok(OpName::Blur),
            "change" => Ok(OpName::Change),
            other => Err(GhostError::UnknownOperation(other.to_string())),
        }
    }
}

impl GhostOp {
    /// Parse an operation name and attach the optional positional argument.
    pub fn parse(name: &str, arg: Option<GhostOptions>) -> Result<GhostOp, GhostError> {
        Ok(name.parse::<OpName>()?.with_arg(arg))
    }

    pub fn name(&self) -> OpName {
        match self {
            GhostOp::Attach(_) => OpName::Attach,
            GhostOp::UpdateConfig(_) => OpName::UpdateConfig,
            GhostOp::FormSubmit => OpName::FormSubmit,
            GhostOp::Focus => OpName::Focus,
            GhostOp::Blur => OpName::Blur,
            GhostOp::Change => OpName::Change,
        }
    }
}

impl From<GhostOptions> for GhostOp {
    /// An options object on its own means "attach".
    fn from(opts: GhostOptions) -> Self {
        GhostOp::Attach(opts)
    }
}
