//! The process-wide context behind `init_robonomics` / `get_robonomics`.
//!
//! Kept in its own test binary: the state is global, so the steps run in
//! one test to fix their order.

use fuji_weather::config::network::{MAINNET, SIDECHAIN};
use fuji_weather::{get_robonomics, init_robonomics, RobonomicsError};

mod common;
use common::{test_wallet, RecordingIpfs};

#[test]
fn test_default_context_lifecycle() {
    assert_eq!(get_robonomics().unwrap_err(), RobonomicsError::NotInitialized);

    init_robonomics(&test_wallet(), RecordingIpfs::new(), MAINNET).unwrap();
    assert_eq!(get_robonomics().unwrap().network_id(), MAINNET);

    assert_eq!(
        init_robonomics(&test_wallet(), RecordingIpfs::new(), 999).unwrap_err(),
        RobonomicsError::UnknownNetwork(999)
    );
    assert_eq!(get_robonomics().unwrap().network_id(), MAINNET);

    init_robonomics(&test_wallet(), RecordingIpfs::new(), SIDECHAIN).unwrap();
    assert_eq!(get_robonomics().unwrap().lighthouse(), "airalab.lighthouse.5.robonomics.sid");
}
