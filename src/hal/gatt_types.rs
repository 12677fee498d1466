//! GATT HAL ABI types
//!
//! Value types and capability tables mirroring the vendor GATT HAL
//! definitions, so a fake can be substituted transparently for the real
//! interface.

use crate::core::address::RawAddress;
use crate::core::uuid::Uuid;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::cast::{FromPrimitive, ToPrimitive};

/// HAL operation status (mirrors bt_status_t)
#[derive(Clone, Copy, Debug, FromPrimitive, ToPrimitive, PartialEq, Eq)]
#[repr(u32)]
pub enum BtStatus {
    Success = 0,
    Fail,
    NotReady,
    NoMemory,
    Busy,
    Done,
    Unsupported,
    InvalidParam,
    Unhandled,
    AuthFailure,
    RemoteDeviceDown,
    AuthRejected,

    // Any statuses that couldn't be cleanly converted
    Unknown = 0xff,
}

impl From<u32> for BtStatus {
    fn from(item: u32) -> Self {
        BtStatus::from_u32(item).unwrap_or_else(|| BtStatus::Unknown)
    }
}

impl From<BtStatus> for u32 {
    fn from(item: BtStatus) -> Self {
        item.to_u32().unwrap_or_else(|| 0xff)
    }
}

/// The kind of attribute a service description element declares (mirrors
/// bt_gatt_db_attribute_type_t)
#[derive(Clone, Copy, Debug, FromPrimitive, ToPrimitive, PartialEq, Eq)]
#[repr(u32)]
pub enum GattDbAttributeType {
    PrimaryService = 0,
    SecondaryService,
    IncludedService,
    Characteristic,
    Descriptor,
}

/// One element of a GATT service description (mirrors btgatt_db_element_t)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GattDbElement {
    pub id: u16,
    pub uuid: Uuid,
    pub type_: GattDbAttributeType,
    pub attribute_handle: u16,
    pub start_handle: u16,
    pub end_handle: u16,
    pub properties: u8,
    pub permissions: u16,
}

/// An attribute value carried in a server response (mirrors btgatt_value_t)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GattValue {
    pub value: Vec<u8>,
    pub handle: u16,
    pub offset: u16,
    pub auth_req: u8,
}

/// A server response to an attribute request (mirrors btgatt_response_t)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GattResponse {
    pub attr_value: GattValue,
}

/// Entry points of the GATT client HAL (mirrors btgatt_client_interface_t).
///
/// Every entry is a plain function pointer with no user-data argument, same
/// as the vendor table. An unset entry means the operation is not supported
/// by the providing interface; callers must check for absence before
/// invoking.
pub struct BtGattClientInterface {
    pub register_client: Option<fn(app_uuid: &Uuid) -> BtStatus>,
    pub unregister_client: Option<fn(client_if: i32) -> BtStatus>,
    pub scan: Option<fn(start: bool) -> BtStatus>,
    pub connect:
        Option<fn(client_if: i32, bd_addr: &RawAddress, is_direct: bool, transport: i32) -> BtStatus>,
    pub disconnect: Option<fn(client_if: i32, bd_addr: &RawAddress, conn_id: i32) -> BtStatus>,
    pub listen: Option<fn(client_if: i32, start: bool) -> BtStatus>,
    pub refresh: Option<fn(client_if: i32, bd_addr: &RawAddress) -> BtStatus>,
    pub search_service: Option<fn(conn_id: i32, filter_uuid: Option<&Uuid>) -> BtStatus>,
    pub read_characteristic: Option<fn(conn_id: i32, handle: u16, auth_req: i32) -> BtStatus>,
    pub write_characteristic:
        Option<fn(conn_id: i32, handle: u16, write_type: i32, auth_req: i32, value: Vec<u8>) -> BtStatus>,
    pub read_descriptor: Option<fn(conn_id: i32, handle: u16, auth_req: i32) -> BtStatus>,
    pub write_descriptor:
        Option<fn(conn_id: i32, handle: u16, write_type: i32, auth_req: i32, value: Vec<u8>) -> BtStatus>,
    pub execute_write: Option<fn(conn_id: i32, execute: i32) -> BtStatus>,
    pub register_for_notification:
        Option<fn(client_if: i32, bd_addr: &RawAddress, handle: u16) -> BtStatus>,
    pub deregister_for_notification:
        Option<fn(client_if: i32, bd_addr: &RawAddress, handle: u16) -> BtStatus>,
    pub read_remote_rssi: Option<fn(client_if: i32, bd_addr: &RawAddress) -> BtStatus>,
    pub scan_filter_param_setup:
        Option<fn(client_if: i32, action: i32, filt_index: i32) -> BtStatus>,
    pub scan_filter_add_remove:
        Option<fn(client_if: i32, action: i32, filt_type: i32, filt_index: i32, value: Vec<u8>) -> BtStatus>,
    pub scan_filter_clear: Option<fn(client_if: i32, filt_index: i32) -> BtStatus>,
    pub scan_filter_enable: Option<fn(client_if: i32, enable: bool) -> BtStatus>,
    pub get_device_type: Option<fn(bd_addr: &RawAddress) -> i32>,
    pub configure_mtu: Option<fn(conn_id: i32, mtu: i32) -> BtStatus>,
    pub conn_parameter_update: Option<
        fn(
            bd_addr: &RawAddress,
            min_interval: i32,
            max_interval: i32,
            latency: i32,
            timeout: i32,
        ) -> BtStatus,
    >,
    pub set_scan_parameters:
        Option<fn(client_if: i32, scan_interval: i32, scan_window: i32) -> BtStatus>,
    pub batchscan_cfg_storage: Option<
        fn(
            client_if: i32,
            batch_scan_full_max: i32,
            batch_scan_trunc_max: i32,
            batch_scan_notify_threshold: i32,
        ) -> BtStatus,
    >,
    pub batchscan_enb_batch_scan: Option<
        fn(
            client_if: i32,
            scan_mode: i32,
            scan_interval: i32,
            scan_window: i32,
            addr_type: i32,
            discard_rule: i32,
        ) -> BtStatus,
    >,
    pub batchscan_dis_batch_scan: Option<fn(client_if: i32) -> BtStatus>,
    pub batchscan_read_reports: Option<fn(client_if: i32, scan_mode: i32) -> BtStatus>,
    pub test_command: Option<fn(command: i32, bd_addr: &RawAddress, uuid: &Uuid) -> BtStatus>,
    pub get_gatt_db: Option<fn(conn_id: i32) -> BtStatus>,
}

/// Entry points of the BLE advertiser HAL (mirrors ble_advertiser_interface_t).
pub struct BleAdvertiserInterface {
    pub register_advertiser: Option<fn(app_uuid: &Uuid) -> BtStatus>,
    pub unregister_advertiser: Option<fn(advertiser_id: i32) -> BtStatus>,
    pub set_adv_data: Option<
        fn(
            advertiser_id: i32,
            set_scan_rsp: bool,
            include_name: bool,
            incl_txpower: bool,
            min_interval: i32,
            max_interval: i32,
            appearance: i32,
            manufacturer_data: Vec<u8>,
            service_data: Vec<u8>,
            service_uuid: Vec<u8>,
        ) -> BtStatus,
    >,
    pub multi_adv_enable: Option<
        fn(
            advertiser_id: i32,
            min_interval: i32,
            max_interval: i32,
            adv_type: i32,
            chnl_map: i32,
            tx_power: i32,
            timeout_s: i32,
        ) -> BtStatus,
    >,
    pub multi_adv_update: Option<
        fn(
            advertiser_id: i32,
            min_interval: i32,
            max_interval: i32,
            adv_type: i32,
            chnl_map: i32,
            tx_power: i32,
            timeout_s: i32,
        ) -> BtStatus,
    >,
    pub multi_adv_set_inst_data: Option<
        fn(
            advertiser_id: i32,
            set_scan_rsp: bool,
            include_name: bool,
            incl_txpower: bool,
            appearance: i32,
            manufacturer_data: Vec<u8>,
            service_data: Vec<u8>,
            service_uuid: Vec<u8>,
        ) -> BtStatus,
    >,
    pub multi_adv_disable: Option<fn(advertiser_id: i32) -> BtStatus>,
}

/// Entry points of the GATT server HAL (mirrors btgatt_server_interface_t).
pub struct BtGattServerInterface {
    pub register_server: Option<fn(app_uuid: &Uuid) -> BtStatus>,
    pub unregister_server: Option<fn(server_if: i32) -> BtStatus>,
    pub connect:
        Option<fn(server_if: i32, bd_addr: &RawAddress, is_direct: bool, transport: i32) -> BtStatus>,
    pub disconnect: Option<fn(server_if: i32, bd_addr: &RawAddress, conn_id: i32) -> BtStatus>,
    pub add_service: Option<fn(server_if: i32, service: Vec<GattDbElement>) -> BtStatus>,
    pub stop_service: Option<fn(server_if: i32, service_handle: i32) -> BtStatus>,
    pub delete_service: Option<fn(server_if: i32, service_handle: i32) -> BtStatus>,
    pub send_indication: Option<
        fn(server_if: i32, attribute_handle: i32, conn_id: i32, confirm: i32, value: Vec<u8>) -> BtStatus,
    >,
    pub send_response:
        Option<fn(conn_id: i32, trans_id: i32, status: i32, response: &GattResponse) -> BtStatus>,
}
