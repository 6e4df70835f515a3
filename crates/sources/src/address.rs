//! Network interface address reader

use pi_sens_core::{AcquisitionError, MetricKind, MetricReader, RawSample, ReaderMetadata};
use std::net::{IpAddr, Ipv4Addr};
use sysinfo::Networks;

/// Reads the IPv4 address assigned to one named interface
pub struct AddressReader {
    metadata: ReaderMetadata,
    interface: String,
}

impl AddressReader {
    pub fn new(interface: impl Into<String>) -> Self {
        let interface = interface.into();
        let metadata = ReaderMetadata {
            id: "address".to_string(),
            name: "Network Address".to_string(),
            description: format!("IPv4 address of interface {}", interface),
            kind: MetricKind::Address,
        };

        Self {
            metadata,
            interface,
        }
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }
}

/// First IPv4 address in `addrs`, skipping IPv6 entries
pub fn first_ipv4(addrs: impl IntoIterator<Item = IpAddr>) -> Option<Ipv4Addr> {
    addrs.into_iter().find_map(|addr| match addr {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
    })
}

impl MetricReader for AddressReader {
    fn metadata(&self) -> &ReaderMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Result<RawSample, AcquisitionError> {
        // Enumerated on every read, interfaces can appear and disappear at runtime
        let networks = Networks::new_with_refreshed_list();
        let data = networks
            .list()
            .get(&self.interface)
            .ok_or_else(|| AcquisitionError::InterfaceNotFound(self.interface.clone()))?;

        let addr = first_ipv4(data.ip_networks().iter().map(|network| network.addr))
            .ok_or_else(|| AcquisitionError::NoIpv4Address(self.interface.clone()))?;

        log::trace!("{} has address {}", self.interface, addr);
        Ok(RawSample::Address(Some(addr)))
    }
}
