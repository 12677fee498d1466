//! Fake GATT HAL interface
//!
//! Substitutes the vendor GATT HAL tables with entry points that forward to
//! test-supplied handlers, and fans simulated asynchronous HAL callbacks
//! out to registered observers. Single-threaded by contract, like the rest
//! of the stack's test surface.

use crate::core::address::RawAddress;
use crate::core::uuid::Uuid;
use crate::hal::gatt_types::{
    BleAdvertiserInterface, BtGattClientInterface, BtGattServerInterface, BtStatus, GattDbElement,
    GattResponse,
};
use crate::utils::observer_list::ObserverList;
use log::info;
use std::cell::RefCell;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Test-supplied behavior behind the wired entries of the advertiser HAL
/// table. Method signatures mirror [`BleAdvertiserInterface`] one-to-one.
///
/// `Send + Sync` because the bound handler lives in a process-wide slot.
pub trait AdvertiserHandler: Send + Sync {
    fn register_advertiser(&self, app_uuid: &Uuid) -> BtStatus;
    fn unregister_advertiser(&self, advertiser_id: i32) -> BtStatus;
    fn multi_adv_enable(
        &self,
        advertiser_id: i32,
        min_interval: i32,
        max_interval: i32,
        adv_type: i32,
        chnl_map: i32,
        tx_power: i32,
        timeout_s: i32,
    ) -> BtStatus;
    #[allow(clippy::too_many_arguments)]
    fn multi_adv_set_inst_data(
        &self,
        advertiser_id: i32,
        set_scan_rsp: bool,
        include_name: bool,
        incl_txpower: bool,
        appearance: i32,
        manufacturer_data: Vec<u8>,
        service_data: Vec<u8>,
        service_uuid: Vec<u8>,
    ) -> BtStatus;
    fn multi_adv_disable(&self, advertiser_id: i32) -> BtStatus;
}

/// Test-supplied behavior behind the wired entries of the client HAL table.
pub trait ClientHandler: Send + Sync {
    fn register_client(&self, app_uuid: &Uuid) -> BtStatus;
    fn unregister_client(&self, client_if: i32) -> BtStatus;
    fn scan(&self, start: bool) -> BtStatus;
    fn connect(
        &self,
        client_if: i32,
        bd_addr: &RawAddress,
        is_direct: bool,
        transport: i32,
    ) -> BtStatus;
    fn disconnect(&self, client_if: i32, bd_addr: &RawAddress, conn_id: i32) -> BtStatus;
}

/// Test-supplied behavior behind the wired entries of the server HAL table.
pub trait ServerHandler: Send + Sync {
    fn register_server(&self, app_uuid: &Uuid) -> BtStatus;
    fn unregister_server(&self, server_if: i32) -> BtStatus;
    fn add_service(&self, server_if: i32, service: Vec<GattDbElement>) -> BtStatus;
    fn delete_service(&self, server_if: i32, service_handle: i32) -> BtStatus;
    fn send_indication(
        &self,
        server_if: i32,
        attribute_handle: i32,
        conn_id: i32,
        confirm: i32,
        value: Vec<u8>,
    ) -> BtStatus;
    fn send_response(
        &self,
        conn_id: i32,
        trans_id: i32,
        status: i32,
        response: &GattResponse,
    ) -> BtStatus;
}

/// Receiver of simulated advertiser HAL callbacks. Every method gets a
/// reference to the notifying interface so multi-instance tests can tell
/// sources apart. All methods default to no-ops so a test implements only
/// what it asserts on.
pub trait AdvertiserObserver {
    fn register_advertiser_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _status: i32,
        _advertiser_id: i32,
        _app_uuid: &Uuid,
    ) {
    }
    fn multi_adv_enable_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _advertiser_id: i32,
        _status: i32,
    ) {
    }
    fn multi_adv_data_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _advertiser_id: i32,
        _status: i32,
    ) {
    }
    fn multi_adv_disable_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _advertiser_id: i32,
        _status: i32,
    ) {
    }
}

/// Receiver of simulated client HAL callbacks.
pub trait ClientObserver {
    fn register_client_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _status: i32,
        _client_if: i32,
        _app_uuid: &Uuid,
    ) {
    }
    fn connect_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _conn_id: i32,
        _status: i32,
        _client_if: i32,
        _bda: &RawAddress,
    ) {
    }
    fn disconnect_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _conn_id: i32,
        _status: i32,
        _client_if: i32,
        _bda: &RawAddress,
    ) {
    }
    fn scan_result_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _bda: &RawAddress,
        _rssi: i32,
        _adv_data: &[u8],
    ) {
    }
}

/// Receiver of simulated server HAL callbacks.
pub trait ServerObserver {
    fn register_server_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _status: i32,
        _server_if: i32,
        _app_uuid: &Uuid,
    ) {
    }
    fn connection_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _conn_id: i32,
        _server_if: i32,
        _connected: i32,
        _bda: &RawAddress,
    ) {
    }
    fn service_added_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _status: i32,
        _server_if: i32,
        _service: &[GattDbElement],
    ) {
    }
    #[allow(clippy::too_many_arguments)]
    fn request_read_characteristic_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _conn_id: i32,
        _trans_id: i32,
        _bda: &RawAddress,
        _attr_handle: i32,
        _offset: i32,
        _is_long: bool,
    ) {
    }
    #[allow(clippy::too_many_arguments)]
    fn request_read_descriptor_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _conn_id: i32,
        _trans_id: i32,
        _bda: &RawAddress,
        _attr_handle: i32,
        _offset: i32,
        _is_long: bool,
    ) {
    }
    #[allow(clippy::too_many_arguments)]
    fn request_write_characteristic_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _conn_id: i32,
        _trans_id: i32,
        _bda: &RawAddress,
        _attr_handle: i32,
        _offset: i32,
        _need_rsp: bool,
        _is_prep: bool,
        _value: &[u8],
    ) {
    }
    #[allow(clippy::too_many_arguments)]
    fn request_write_descriptor_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _conn_id: i32,
        _trans_id: i32,
        _bda: &RawAddress,
        _attr_handle: i32,
        _offset: i32,
        _need_rsp: bool,
        _is_prep: bool,
        _value: &[u8],
    ) {
    }
    fn request_exec_write_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _conn_id: i32,
        _trans_id: i32,
        _bda: &RawAddress,
        _exec_write: i32,
    ) {
    }
    fn indication_sent_callback(
        &self,
        _gatt_iface: &FakeBluetoothGattInterface,
        _conn_id: i32,
        _status: i32,
    ) {
    }
}

/// The process-wide handler slots, one per capability area.
///
/// The HAL entry points are plain function pointers with no user-data
/// argument, so the bound handlers have to live here rather than in any
/// facility instance.
struct HandlerRegistry {
    advertiser: Option<Arc<dyn AdvertiserHandler>>,
    client: Option<Arc<dyn ClientHandler>>,
    server: Option<Arc<dyn ServerHandler>>,
}

impl HandlerRegistry {
    const fn new() -> Self {
        Self { advertiser: None, client: None, server: None }
    }

    /// Binds the provided handlers. Every slot must be empty on entry:
    /// only one fake GATT interface may be active at a time.
    fn bind(
        &mut self,
        advertiser: Option<Arc<dyn AdvertiserHandler>>,
        client: Option<Arc<dyn ClientHandler>>,
        server: Option<Arc<dyn ServerHandler>>,
    ) {
        assert!(
            self.advertiser.is_none() && self.client.is_none() && self.server.is_none(),
            "a fake GATT interface is already active"
        );
        self.advertiser = advertiser;
        self.client = client;
        self.server = server;
    }

    /// Empties every slot. Safe to call when nothing was ever bound.
    fn clear(&mut self) {
        self.advertiser = None;
        self.client = None;
        self.server = None;
    }
}

static HANDLERS: Mutex<HandlerRegistry> = Mutex::new(HandlerRegistry::new());

/// Locks the handler registry. A failed bind assertion poisons the mutex;
/// teardown still has to get through, so recover the guard.
fn lock_handlers() -> MutexGuard<'static, HandlerRegistry> {
    HANDLERS.lock().unwrap_or_else(PoisonError::into_inner)
}

fn advertiser_handler() -> Option<Arc<dyn AdvertiserHandler>> {
    lock_handlers().advertiser.clone()
}

fn client_handler() -> Option<Arc<dyn ClientHandler>> {
    lock_handlers().client.clone()
}

fn server_handler() -> Option<Arc<dyn ServerHandler>> {
    lock_handlers().server.clone()
}

// The table entry points. Each forwards to the currently bound handler, or
// reports the HAL's uniform failure status when no handler is bound. No
// validation, no state of its own.

fn fake_register_client(app_uuid: &Uuid) -> BtStatus {
    match client_handler() {
        Some(handler) => handler.register_client(app_uuid),
        None => BtStatus::Fail,
    }
}

fn fake_unregister_client(client_if: i32) -> BtStatus {
    match client_handler() {
        Some(handler) => handler.unregister_client(client_if),
        None => BtStatus::Fail,
    }
}

fn fake_scan(start: bool) -> BtStatus {
    match client_handler() {
        Some(handler) => handler.scan(start),
        None => BtStatus::Fail,
    }
}

fn fake_connect(client_if: i32, bd_addr: &RawAddress, is_direct: bool, transport: i32) -> BtStatus {
    match client_handler() {
        Some(handler) => handler.connect(client_if, bd_addr, is_direct, transport),
        None => BtStatus::Fail,
    }
}

fn fake_disconnect(client_if: i32, bd_addr: &RawAddress, conn_id: i32) -> BtStatus {
    match client_handler() {
        Some(handler) => handler.disconnect(client_if, bd_addr, conn_id),
        None => BtStatus::Fail,
    }
}

fn fake_register_advertiser(app_uuid: &Uuid) -> BtStatus {
    match advertiser_handler() {
        Some(handler) => handler.register_advertiser(app_uuid),
        None => BtStatus::Fail,
    }
}

fn fake_unregister_advertiser(advertiser_id: i32) -> BtStatus {
    match advertiser_handler() {
        Some(handler) => handler.unregister_advertiser(advertiser_id),
        None => BtStatus::Fail,
    }
}

fn fake_multi_adv_enable(
    advertiser_id: i32,
    min_interval: i32,
    max_interval: i32,
    adv_type: i32,
    chnl_map: i32,
    tx_power: i32,
    timeout_s: i32,
) -> BtStatus {
    match advertiser_handler() {
        Some(handler) => handler.multi_adv_enable(
            advertiser_id,
            min_interval,
            max_interval,
            adv_type,
            chnl_map,
            tx_power,
            timeout_s,
        ),
        None => BtStatus::Fail,
    }
}

#[allow(clippy::too_many_arguments)]
fn fake_multi_adv_set_inst_data(
    advertiser_id: i32,
    set_scan_rsp: bool,
    include_name: bool,
    incl_txpower: bool,
    appearance: i32,
    manufacturer_data: Vec<u8>,
    service_data: Vec<u8>,
    service_uuid: Vec<u8>,
) -> BtStatus {
    match advertiser_handler() {
        Some(handler) => handler.multi_adv_set_inst_data(
            advertiser_id,
            set_scan_rsp,
            include_name,
            incl_txpower,
            appearance,
            manufacturer_data,
            service_data,
            service_uuid,
        ),
        None => BtStatus::Fail,
    }
}

fn fake_multi_adv_disable(advertiser_id: i32) -> BtStatus {
    match advertiser_handler() {
        Some(handler) => handler.multi_adv_disable(advertiser_id),
        None => BtStatus::Fail,
    }
}

fn fake_register_server(app_uuid: &Uuid) -> BtStatus {
    match server_handler() {
        Some(handler) => handler.register_server(app_uuid),
        None => BtStatus::Fail,
    }
}

fn fake_unregister_server(server_if: i32) -> BtStatus {
    match server_handler() {
        Some(handler) => handler.unregister_server(server_if),
        None => BtStatus::Fail,
    }
}

fn fake_add_service(server_if: i32, service: Vec<GattDbElement>) -> BtStatus {
    match server_handler() {
        Some(handler) => handler.add_service(server_if, service),
        None => BtStatus::Fail,
    }
}

fn fake_delete_service(server_if: i32, service_handle: i32) -> BtStatus {
    match server_handler() {
        Some(handler) => handler.delete_service(server_if, service_handle),
        None => BtStatus::Fail,
    }
}

fn fake_send_indication(
    server_if: i32,
    attribute_handle: i32,
    conn_id: i32,
    confirm: i32,
    value: Vec<u8>,
) -> BtStatus {
    match server_handler() {
        Some(handler) => {
            handler.send_indication(server_if, attribute_handle, conn_id, confirm, value)
        }
        None => BtStatus::Fail,
    }
}

fn fake_send_response(conn_id: i32, trans_id: i32, status: i32, response: &GattResponse) -> BtStatus {
    match server_handler() {
        Some(handler) => handler.send_response(conn_id, trans_id, status, response),
        None => BtStatus::Fail,
    }
}

/// The client HAL table handed to the stack under test. Only the entries
/// the test suite exercises forward anywhere; the rest stay unset,
/// reflecting the HAL surface not yet needed.
static FAKE_GATT_CLIENT_INTERFACE: BtGattClientInterface = BtGattClientInterface {
    register_client: Some(fake_register_client),
    unregister_client: Some(fake_unregister_client),
    scan: Some(fake_scan),
    connect: Some(fake_connect),
    disconnect: Some(fake_disconnect),
    listen: None,
    refresh: None,
    search_service: None,
    read_characteristic: None,
    write_characteristic: None,
    read_descriptor: None,
    write_descriptor: None,
    execute_write: None,
    register_for_notification: None,
    deregister_for_notification: None,
    read_remote_rssi: None,
    scan_filter_param_setup: None,
    scan_filter_add_remove: None,
    scan_filter_clear: None,
    scan_filter_enable: None,
    get_device_type: None,
    configure_mtu: None,
    conn_parameter_update: None,
    set_scan_parameters: None,
    batchscan_cfg_storage: None,
    batchscan_enb_batch_scan: None,
    batchscan_dis_batch_scan: None,
    batchscan_read_reports: None,
    test_command: None,
    get_gatt_db: None,
};

static FAKE_BLE_ADVERTISER_INTERFACE: BleAdvertiserInterface = BleAdvertiserInterface {
    register_advertiser: Some(fake_register_advertiser),
    unregister_advertiser: Some(fake_unregister_advertiser),
    set_adv_data: None,
    multi_adv_enable: Some(fake_multi_adv_enable),
    multi_adv_update: None,
    multi_adv_set_inst_data: Some(fake_multi_adv_set_inst_data),
    multi_adv_disable: Some(fake_multi_adv_disable),
};

static FAKE_GATT_SERVER_INTERFACE: BtGattServerInterface = BtGattServerInterface {
    register_server: Some(fake_register_server),
    unregister_server: Some(fake_unregister_server),
    connect: None,
    disconnect: None,
    add_service: Some(fake_add_service),
    stop_service: None,
    delete_service: Some(fake_delete_service),
    send_indication: Some(fake_send_indication),
    send_response: Some(fake_send_response),
};

/// A fake substitute for the vendor GATT HAL.
///
/// Constructing an instance binds the provided handlers into the
/// process-wide slots behind the capability tables; dropping it frees
/// them. At most one instance may be active at a time. To change handlers,
/// drop the instance and construct a new one.
///
/// The `notify_*` family simulates asynchronous HAL callbacks arriving:
/// each call delivers the event synchronously, on the calling thread, to
/// every registered observer in registration order, and returns only after
/// the last observer has. Events are not buffered; an observer registered
/// after a notify call never sees that event. Adding or removing observers
/// from inside a callback is not supported.
pub struct FakeBluetoothGattInterface {
    advertiser_observers: RefCell<ObserverList<dyn AdvertiserObserver>>,
    client_observers: RefCell<ObserverList<dyn ClientObserver>>,
    server_observers: RefCell<ObserverList<dyn ServerObserver>>,
}

impl FakeBluetoothGattInterface {
    /// Binds the provided handlers into the process-wide slots.
    ///
    /// Passing `None` for a capability area is legal and means every
    /// operation in that area fails by default.
    ///
    /// # Panics
    /// Panics if another instance is still alive. Double-construction is a
    /// broken test setup, not a runtime condition to recover from.
    pub fn new(
        advertiser_handler: Option<Arc<dyn AdvertiserHandler>>,
        client_handler: Option<Arc<dyn ClientHandler>>,
        server_handler: Option<Arc<dyn ServerHandler>>,
    ) -> Self {
        lock_handlers().bind(advertiser_handler, client_handler, server_handler);
        info!("fake GATT HAL handlers bound");
        Self {
            advertiser_observers: RefCell::new(ObserverList::new()),
            client_observers: RefCell::new(ObserverList::new()),
            server_observers: RefCell::new(ObserverList::new()),
        }
    }

    /// Returns the advertiser HAL table.
    ///
    /// The table is a process-wide constant and outlives this instance:
    /// entries invoked after this instance is dropped report
    /// [`BtStatus::Fail`] until another instance binds a handler.
    pub fn advertiser_hal_interface(&self) -> &'static BleAdvertiserInterface {
        &FAKE_BLE_ADVERTISER_INTERFACE
    }

    /// Returns the client HAL table. See
    /// [`advertiser_hal_interface`](Self::advertiser_hal_interface) for
    /// lifetime notes.
    pub fn client_hal_interface(&self) -> &'static BtGattClientInterface {
        &FAKE_GATT_CLIENT_INTERFACE
    }

    /// Returns the server HAL table. See
    /// [`advertiser_hal_interface`](Self::advertiser_hal_interface) for
    /// lifetime notes.
    pub fn server_hal_interface(&self) -> &'static BtGattServerInterface {
        &FAKE_GATT_SERVER_INTERFACE
    }

    /// Registers an observer for simulated advertiser callbacks.
    ///
    /// Observers are tracked by reference, not owned; remove an observer
    /// before dropping it. Registering the same observer twice panics.
    pub fn add_advertiser_observer(&self, observer: &Arc<dyn AdvertiserObserver>) {
        self.advertiser_observers.borrow_mut().add_observer(observer);
    }

    pub fn remove_advertiser_observer(&self, observer: &Arc<dyn AdvertiserObserver>) {
        self.advertiser_observers.borrow_mut().remove_observer(observer);
    }

    /// Registers an observer for simulated client callbacks. Same tracking
    /// rules as [`add_advertiser_observer`](Self::add_advertiser_observer).
    pub fn add_client_observer(&self, observer: &Arc<dyn ClientObserver>) {
        self.client_observers.borrow_mut().add_observer(observer);
    }

    pub fn remove_client_observer(&self, observer: &Arc<dyn ClientObserver>) {
        self.client_observers.borrow_mut().remove_observer(observer);
    }

    /// Registers an observer for simulated server callbacks. Same tracking
    /// rules as [`add_advertiser_observer`](Self::add_advertiser_observer).
    pub fn add_server_observer(&self, observer: &Arc<dyn ServerObserver>) {
        self.server_observers.borrow_mut().add_observer(observer);
    }

    pub fn remove_server_observer(&self, observer: &Arc<dyn ServerObserver>) {
        self.server_observers.borrow_mut().remove_observer(observer);
    }

    // The methods below notify observers with the given simulated callback
    // events and parameters.

    pub fn notify_register_client_callback(&self, status: i32, client_if: i32, app_uuid: &Uuid) {
        self.client_observers.borrow().for_each(|observer| {
            observer.register_client_callback(self, status, client_if, app_uuid)
        });
    }

    pub fn notify_connect_callback(
        &self,
        conn_id: i32,
        status: i32,
        client_if: i32,
        bda: &RawAddress,
    ) {
        self.client_observers
            .borrow()
            .for_each(|observer| observer.connect_callback(self, conn_id, status, client_if, bda));
    }

    pub fn notify_disconnect_callback(
        &self,
        conn_id: i32,
        status: i32,
        client_if: i32,
        bda: &RawAddress,
    ) {
        self.client_observers.borrow().for_each(|observer| {
            observer.disconnect_callback(self, conn_id, status, client_if, bda)
        });
    }

    pub fn notify_scan_result_callback(&self, bda: &RawAddress, rssi: i32, adv_data: &[u8]) {
        self.client_observers
            .borrow()
            .for_each(|observer| observer.scan_result_callback(self, bda, rssi, adv_data));
    }

    pub fn notify_register_advertiser_callback(
        &self,
        status: i32,
        advertiser_id: i32,
        app_uuid: &Uuid,
    ) {
        self.advertiser_observers.borrow().for_each(|observer| {
            observer.register_advertiser_callback(self, status, advertiser_id, app_uuid)
        });
    }

    pub fn notify_multi_adv_enable_callback(&self, advertiser_id: i32, status: i32) {
        self.advertiser_observers
            .borrow()
            .for_each(|observer| observer.multi_adv_enable_callback(self, advertiser_id, status));
    }

    pub fn notify_multi_adv_data_callback(&self, advertiser_id: i32, status: i32) {
        self.advertiser_observers
            .borrow()
            .for_each(|observer| observer.multi_adv_data_callback(self, advertiser_id, status));
    }

    pub fn notify_multi_adv_disable_callback(&self, advertiser_id: i32, status: i32) {
        self.advertiser_observers
            .borrow()
            .for_each(|observer| observer.multi_adv_disable_callback(self, advertiser_id, status));
    }

    pub fn notify_register_server_callback(&self, status: i32, server_if: i32, app_uuid: &Uuid) {
        self.server_observers.borrow().for_each(|observer| {
            observer.register_server_callback(self, status, server_if, app_uuid)
        });
    }

    pub fn notify_server_connection_callback(
        &self,
        conn_id: i32,
        server_if: i32,
        connected: i32,
        bda: &RawAddress,
    ) {
        self.server_observers.borrow().for_each(|observer| {
            observer.connection_callback(self, conn_id, server_if, connected, bda)
        });
    }

    pub fn notify_service_added_callback(
        &self,
        status: i32,
        server_if: i32,
        service: &[GattDbElement],
    ) {
        self.server_observers.borrow().for_each(|observer| {
            observer.service_added_callback(self, status, server_if, service)
        });
    }

    pub fn notify_request_read_characteristic_callback(
        &self,
        conn_id: i32,
        trans_id: i32,
        bda: &RawAddress,
        attr_handle: i32,
        offset: i32,
        is_long: bool,
    ) {
        self.server_observers.borrow().for_each(|observer| {
            observer.request_read_characteristic_callback(
                self, conn_id, trans_id, bda, attr_handle, offset, is_long,
            )
        });
    }

    pub fn notify_request_read_descriptor_callback(
        &self,
        conn_id: i32,
        trans_id: i32,
        bda: &RawAddress,
        attr_handle: i32,
        offset: i32,
        is_long: bool,
    ) {
        self.server_observers.borrow().for_each(|observer| {
            observer.request_read_descriptor_callback(
                self, conn_id, trans_id, bda, attr_handle, offset, is_long,
            )
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn notify_request_write_characteristic_callback(
        &self,
        conn_id: i32,
        trans_id: i32,
        bda: &RawAddress,
        attr_handle: i32,
        offset: i32,
        need_rsp: bool,
        is_prep: bool,
        value: &[u8],
    ) {
        self.server_observers.borrow().for_each(|observer| {
            observer.request_write_characteristic_callback(
                self, conn_id, trans_id, bda, attr_handle, offset, need_rsp, is_prep, value,
            )
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn notify_request_write_descriptor_callback(
        &self,
        conn_id: i32,
        trans_id: i32,
        bda: &RawAddress,
        attr_handle: i32,
        offset: i32,
        need_rsp: bool,
        is_prep: bool,
        value: &[u8],
    ) {
        self.server_observers.borrow().for_each(|observer| {
            observer.request_write_descriptor_callback(
                self, conn_id, trans_id, bda, attr_handle, offset, need_rsp, is_prep, value,
            )
        });
    }

    pub fn notify_request_exec_write_callback(
        &self,
        conn_id: i32,
        trans_id: i32,
        bda: &RawAddress,
        exec_write: i32,
    ) {
        self.server_observers.borrow().for_each(|observer| {
            observer.request_exec_write_callback(self, conn_id, trans_id, bda, exec_write)
        });
    }

    pub fn notify_indication_sent_callback(&self, conn_id: i32, status: i32) {
        self.server_observers
            .borrow()
            .for_each(|observer| observer.indication_sent_callback(self, conn_id, status));
    }
}

impl Drop for FakeBluetoothGattInterface {
    fn drop(&mut self) {
        lock_handlers().clear();
        info!("fake GATT HAL handler slots cleared");
    }
}
