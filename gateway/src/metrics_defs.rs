//! Metrics definitions for the gateway.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Counter,
}

#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub description: &'static str,
}

pub const SUBMIT_FORWARDED: MetricDef = MetricDef {
    name: "submit.forwarded",
    metric_type: MetricType::Counter,
    description: "Form submissions forwarded to the configured endpoint with a 2xx reply",
};

pub const SUBMIT_FORWARD_FAILED: MetricDef = MetricDef {
    name: "submit.forward_failed",
    metric_type: MetricType::Counter,
    description: "Form submissions the remote endpoint answered with a non-2xx status",
};

pub const PRODUCTS_UPLOAD: MetricDef = MetricDef {
    name: "products.upload",
    metric_type: MetricType::Counter,
    description: "Product list uploads that replaced a family's list",
};

pub const INVENTORY_PUSH: MetricDef = MetricDef {
    name: "inventory.push",
    metric_type: MetricType::Counter,
    description: "Inventory snapshot pushes accepted from the external system",
};

pub const ALL_METRICS: &[MetricDef] = &[
    SUBMIT_FORWARDED,
    SUBMIT_FORWARD_FAILED,
    PRODUCTS_UPLOAD,
    INVENTORY_PUSH,
];

macro_rules! counter {
    ($def:expr) => {
        metrics::counter!($def.name)
    };
}

pub(crate) use counter;
