//! Canned `adb devices` output.

pub const HEADER_ONLY: &str = "List of devices attached\n\n";

pub const ONE_ONLINE_ONE_OFFLINE: &str = "List of devices attached\nABC123\tdevice\nXYZ999\toffline\n\n";

pub const TWO_ONLINE: &str = "List of devices attached\nABC123\tdevice\nemulator-5554\tdevice\n\n";

pub const UNAUTHORIZED_ONLY: &str = "List of devices attached\nR58M123\tunauthorized\n\n";
