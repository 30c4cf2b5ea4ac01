//! ABI surface of the external registry contract.
//!
//! The contract is an opaque collaborator; the only entry point this client
//! touches is `register`.

use alloy_sol_types::sol;

sol! {
    /// Registers a handle. Payable; the fixed registration fee is attached
    /// as the transaction value.
    function register(string name) external payable;
}
