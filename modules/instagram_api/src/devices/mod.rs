//! Android device identities used to mimic the official app

pub mod device;
pub mod good_devices;

pub use device::{Device, DeviceError};
pub use good_devices::{
    all_good_devices, is_good_device, random_good_device, CPU_ABI, GOOD_DEVICES,
};
