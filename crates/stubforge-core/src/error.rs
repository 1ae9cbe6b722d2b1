//! Error types for fixture synthesis.
//!
//! Every failure aborts the top-level synthesis call that raised it; partial
//! object graphs are never handed back to the caller.

use thiserror::Error;

/// Errors that can occur while configuring a factory or synthesizing a value.
#[derive(Debug, Error)]
pub enum StubError {
	/// No constructor of the bean type could be invoked with synthesized arguments.
	#[error("No usable constructor for {0}: no no-arg constructor and every other constructor failed")]
	NoUsableConstructor(String),

	/// A container type was requested with the wrong number of generic parameters.
	#[error(
		"Invalid generic arity for {type_name}: expected {expected} generic parameter(s), got {actual}"
	)]
	InvalidGenericArity {
		/// Container type being synthesized.
		type_name: String,
		/// Arity required by the container kind.
		expected: usize,
		/// Arity that was resolved.
		actual: usize,
	},

	/// An override was rejected when it was registered.
	#[error("Invalid override for '{property}': {reason}")]
	InvalidOverride {
		/// Mutator name the override was registered for.
		property: String,
		/// Why the registration was rejected.
		reason: String,
	},

	/// A resolved value could not be assigned through its mutator.
	#[error("Cannot invoke mutator '{property}' of {target} with argument of type {value}")]
	MutatorInvocationFailed {
		/// Mutator name.
		property: String,
		/// Bean type owning the mutator.
		target: String,
		/// Runtime type of the rejected value.
		value: String,
	},

	/// A type reached synthesis without having been registered.
	#[error("Type is not registered for synthesis: {0}")]
	UnregisteredType(String),

	/// A synthesized value did not have the type its consumer declared.
	#[error("Type mismatch: expected {expected}, got {actual}")]
	TypeMismatch {
		/// Type the consumer declared.
		expected: String,
		/// Runtime type of the value.
		actual: String,
	},

	/// An interface stub was asked for a member the interface never declared.
	#[error("Interface {interface} has no member named '{member}'")]
	UnknownMember {
		/// Interface type.
		interface: String,
		/// Requested member name.
		member: String,
	},

	/// Settings could not be read or are out of range.
	#[error("Invalid settings: {0}")]
	InvalidSettings(String),

	/// TOML settings could not be parsed.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// I/O failure while reading a settings file.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for stubforge operations.
pub type StubResult<T> = Result<T, StubError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_no_usable_constructor_message() {
		let error = StubError::NoUsableConstructor("app::Account".to_string());
		assert!(error.to_string().starts_with("No usable constructor for app::Account"));
	}

	#[rstest]
	fn test_invalid_generic_arity_message() {
		let error = StubError::InvalidGenericArity {
			type_name: "HashMap<String, i32>".to_string(),
			expected: 2,
			actual: 0,
		};
		assert_eq!(
			error.to_string(),
			"Invalid generic arity for HashMap<String, i32>: expected 2 generic parameter(s), got 0"
		);
	}

	#[rstest]
	fn test_mutator_invocation_failed_message() {
		let error = StubError::MutatorInvocationFailed {
			property: "set_name".to_string(),
			target: "Person".to_string(),
			value: "i32".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Cannot invoke mutator 'set_name' of Person with argument of type i32"
		);
	}

	#[rstest]
	fn test_toml_error_from() {
		let toml_error = toml::from_str::<toml::Table>("= broken").unwrap_err();
		let error: StubError = toml_error.into();
		assert!(matches!(error, StubError::Toml(_)));
	}
}
