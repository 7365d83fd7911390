//! Obfuscation options and preset selection.
//!
//! The service accepts either a named preset, which it resolves into
//! concrete options itself, or the custom sentinel together with an
//! explicit boolean for every [`OptionKey`].

use std::fmt;

/// Wire identifier of the custom sentinel preset.
///
/// The service reads this as "no preset, use the supplied flags".
pub const CUSTOM_PRESET_ID: &str = "none";

/// Number of entries in the option checklist.
pub const OPTION_COUNT: usize = 12;

/// One entry of the fixed option checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    ControlFlow,
    StringEncoding,
    VariableRenaming,
    GarbageCode,
    OpaquePredicates,
    FunctionInlining,
    DynamicCode,
    Compressor,
    BytecodeEncoder,
    StringToExpressions,
    VmGenerator,
    WrapInFunction,
}

impl OptionKey {
    /// All keys in checklist order.
    pub const ALL: [Self; OPTION_COUNT] = [
        Self::ControlFlow,
        Self::StringEncoding,
        Self::VariableRenaming,
        Self::GarbageCode,
        Self::OpaquePredicates,
        Self::FunctionInlining,
        Self::DynamicCode,
        Self::Compressor,
        Self::BytecodeEncoder,
        Self::StringToExpressions,
        Self::VmGenerator,
        Self::WrapInFunction,
    ];

    /// Multipart field name sent to the service.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::ControlFlow => "controlFlow",
            Self::StringEncoding => "stringEncoding",
            Self::VariableRenaming => "variableRenaming",
            Self::GarbageCode => "garbageCode",
            Self::OpaquePredicates => "opaquePredicates",
            Self::FunctionInlining => "functionInlining",
            Self::DynamicCode => "dynamicCode",
            Self::Compressor => "compressor",
            Self::BytecodeEncoder => "bytecodeEncoder",
            Self::StringToExpressions => "stringToExpressions",
            Self::VmGenerator => "vmGenerator",
            Self::WrapInFunction => "wrapInFunction",
        }
    }

    /// Checklist label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ControlFlow => "Control Flow Flattening",
            Self::StringEncoding => "String Encoding",
            Self::VariableRenaming => "Variable Renaming",
            Self::GarbageCode => "Garbage Code",
            Self::OpaquePredicates => "Opaque Predicates",
            Self::FunctionInlining => "Function Inlining",
            Self::DynamicCode => "Dynamic Code",
            Self::Compressor => "Compressor",
            Self::BytecodeEncoder => "Bytecode Encoder",
            Self::StringToExpressions => "String to Expressions",
            Self::VmGenerator => "VM Generator",
            Self::WrapInFunction => "Wrap in Function",
        }
    }

    /// One-line description shown under the label.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ControlFlow => "Flatten branches into a dispatcher loop.",
            Self::StringEncoding => "Encode string literals.",
            Self::VariableRenaming => "Replace local names with meaningless identifiers.",
            Self::GarbageCode => "Insert dead code that never runs.",
            Self::OpaquePredicates => "Guard code with conditions of known outcome.",
            Self::FunctionInlining => "Inline small function bodies at call sites.",
            Self::DynamicCode => "Generate code at runtime.",
            Self::Compressor => "Compress the output.",
            Self::BytecodeEncoder => "Encode the output as bytecode.",
            Self::StringToExpressions => "Rewrite strings as computed expressions.",
            Self::VmGenerator => "Run the program inside a generated virtual machine.",
            Self::WrapInFunction => "Wrap the whole program in a function.",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A boolean for every [`OptionKey`]. All false by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionSet([bool; OPTION_COUNT]);

impl OptionSet {
    /// Whether `key` is enabled.
    #[must_use]
    pub const fn get(&self, key: OptionKey) -> bool {
        self.0[key.index()]
    }

    /// Enable or disable `key`.
    pub const fn set(&mut self, key: OptionKey, enabled: bool) {
        self.0[key.index()] = enabled;
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub const fn with(mut self, key: OptionKey, enabled: bool) -> Self {
        self.set(key, enabled);
        self
    }

    /// Every key with its value, in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, bool)> + '_ {
        OptionKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// The checked preset radio.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PresetSelection {
    /// A server-resolved preset, identified by its opaque id.
    Named(String),
    /// Explicit flags from the checklist.
    Custom,
}

impl PresetSelection {
    /// Parse a radio value. The custom sentinel maps to [`Custom`](Self::Custom).
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        if id == CUSTOM_PRESET_ID {
            Self::Custom
        } else {
            Self::Named(id.to_owned())
        }
    }

    /// Identifier sent in the `preset` field.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Named(id) => id,
            Self::Custom => CUSTOM_PRESET_ID,
        }
    }

    /// Whether this is the custom sentinel.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

/// UI state of the options form.
///
/// `checklist` is only read when `preset` is [`PresetSelection::Custom`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsState {
    /// The checked preset radio, if any.
    pub preset: Option<PresetSelection>,
    /// Checkbox states of the custom checklist.
    pub checklist: OptionSet,
}

impl OptionsState {
    /// Form state with `preset` checked and an empty checklist.
    #[must_use]
    pub fn with_preset(preset: Option<PresetSelection>) -> Self {
        Self {
            preset,
            checklist: OptionSet::default(),
        }
    }

    /// Whether the custom checklist should be visible.
    #[must_use]
    pub fn shows_checklist(&self) -> bool {
        self.preset.as_ref().is_some_and(PresetSelection::is_custom)
    }
}
