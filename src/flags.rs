///
/// @package codesign-check
///
/// @file Flags
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use bitflags::bitflags;

bitflags! {
    /// Code signing flags of the host platform, in report order
    #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
    pub struct CodeSignFlags: u32 {
        const CS_VALID = 0x0000_0001; // Dynamically valid
        const CS_ADHOC = 0x0000_0002; // Ad hoc signed
        const CS_GET_TASK_ALLOW = 0x0000_0004; // Has get-task-allow entitlement
        const CS_INSTALLER = 0x0000_0008; // Has installer entitlement
        const CS_FORCED_LV = 0x0000_0010; // Library validation forced by hardened runtime
        const CS_INVALID_ALLOWED = 0x0000_0020; // Page invalidation allowed by task port policy
        const CS_HARD = 0x0000_0100; // Don't load invalid pages
        const CS_KILL = 0x0000_0200; // Kill process if it becomes invalid
        const CS_CHECK_EXPIRATION = 0x0000_0400; // Force expiration checking
        const CS_RESTRICT = 0x0000_0800; // Tell dyld to treat restricted
        const CS_ENFORCEMENT = 0x0000_1000; // Require enforcement
        const CS_REQUIRE_LV = 0x0000_2000; // Require library validation
        const CS_ENTITLEMENTS_VALIDATED = 0x0000_4000; // Code signature permits restricted entitlements
        const CS_NVRAM_UNRESTRICTED = 0x0000_8000; // Has restricted NVRAM entitlement
        const CS_RUNTIME = 0x0001_0000; // Apply hardened runtime policies
        const CS_EXEC_SET_HARD = 0x0010_0000; // Set CS_HARD on any exec'ed process
        const CS_EXEC_SET_KILL = 0x0020_0000; // Set CS_KILL on any exec'ed process
        const CS_EXEC_SET_ENFORCEMENT = 0x0040_0000; // Set CS_ENFORCEMENT on any exec'ed process
        const CS_EXEC_INHERIT_SIP = 0x0080_0000; // Set CS_INSTALLER on any exec'ed process
        const CS_KILLED = 0x0100_0000; // Was killed by kernel for invalidity
        const CS_DYLD_PLATFORM = 0x0200_0000; // Dyld used to load this is a platform binary
        const CS_PLATFORM_BINARY = 0x0400_0000; // This is a platform binary
        const CS_PLATFORM_PATH = 0x0800_0000; // Platform binary by the fact of path
        const CS_DEBUGGED = 0x1000_0000; // Process is or has been debugged
        const CS_SIGNED = 0x2000_0000; // Process has a signature
        const CS_DEV_CODE = 0x4000_0000; // Code is dev signed
        const CS_DATAVAULT_CONTROLLER = 0x8000_0000; // Has Data Vault controller entitlement
    }
}

impl From<i64> for CodeSignFlags {
    /// Only the low 32 bits can match a flag, so the rest is dropped
    fn from(value: i64) -> Self {
        Self::from_bits_retain(value as u32)
    }
}
