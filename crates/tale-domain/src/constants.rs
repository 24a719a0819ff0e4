//! Domain constants
//!
//! Status messages reported to a build observer and the defaults used
//! when compiling fixture grammars.

// ============================================================================
// BUILD STATUS MESSAGES
// ============================================================================

/// Emitted once the build attempt has passed validation
pub const STATUS_STARTING: &str = "Starting to rebuild the fixture model";

/// Emitted before the system starts and prepares its environment
pub const STATUS_ENVIRONMENT: &str = "Setting up the system environment";

/// Emitted before the system registers its services
pub const STATUS_SERVICES: &str = "Registering the system services";

/// Emitted before the fixture catalog is compiled
pub const STATUS_FIXTURES: &str = "Starting to read fixtures";

/// Emitted exactly once when a build attempt ends, successful or not
pub const STATUS_FINISHED: &str = "Finished rebuilding the fixture model";

// ============================================================================
// GRAMMAR CONSTANTS
// ============================================================================

/// Value type assigned to template placeholders that declare no cell
pub const DEFAULT_VALUE_TYPE: &str = "string";
