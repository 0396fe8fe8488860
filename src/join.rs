use crate::capture::Capture;
use crate::counters::error_observation;
use crate::interface_name::expand;
use crate::types::{InterfaceRecord, NeighborRecord};

/// Attach CDP neighbor and error counter data to the interface records.
///
/// The first neighbor (in capture order) whose local port equals the
/// interface id wins; any further neighbors on the same port are ignored.
pub(crate) fn join_records(
    interfaces: &mut [InterfaceRecord],
    neighbors: &[NeighborRecord],
    capture: &Capture,
) {
    for interface in interfaces.iter_mut() {
        if let Some(neighbor) = neighbors
            .iter()
            .find(|n| n.local_port == interface.interface_id)
        {
            interface.cdp_neighbor_device = neighbor.neighbor_device.clone();
            interface.cdp_neighbor_ip = neighbor.neighbor_ip.clone();
            interface.neighbor_dest_port = neighbor.neighbor_port.clone();
        }

        let observation = error_observation(capture, &expand(&interface.interface_id));
        if !observation.is_empty() {
            interface.observation = observation;
        }
    }
}
