use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::OnceLock;

// It's important to use the exported crate `prometheus_exporter::prometheus`
// instead of `prometheus`, as different versions of that crate have
// incompatible global registries.
use prometheus_exporter::prometheus;

pub struct PrometheusMetrics {
    pub books_added: prometheus::IntCounter,
    pub authors_added: prometheus::IntCounter,
}

static METRICS: OnceLock<PrometheusMetrics> = OnceLock::new();

pub fn metrics() -> &'static PrometheusMetrics {
    METRICS.get_or_init(|| PrometheusMetrics::new(prometheus::default_registry().clone()))
}

impl PrometheusMetrics {
    fn new(registry: prometheus::Registry) -> Self {
        let books_added = prometheus::register_int_counter_with_registry!(
            "bookshelf_books_added",
            "Number of books added through the addBook mutation",
            registry
        )
        .unwrap();
        let authors_added = prometheus::register_int_counter_with_registry!(
            "bookshelf_authors_added",
            "Number of authors added through the addAuthor mutation",
            registry
        )
        .unwrap();

        Self {
            books_added,
            authors_added,
        }
    }
}

#[derive(Debug)]
pub struct PrometheusExporter {
    binding: SocketAddr,
    _exporter: prometheus_exporter::Exporter,
}

impl PrometheusExporter {
    /// Starts exporting Prometheus metrics at `http://0.0.0.0:{port}/metrics`. The server
    /// will keep running until the returned [`PrometheusExporter`] is dropped.
    pub fn start(port: u16, registry: prometheus::Registry) -> anyhow::Result<Self> {
        let binding = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port));
        let exporter = {
            let mut builder = prometheus_exporter::Builder::new(binding);
            builder.with_registry(registry);
            builder.start()?
        };

        Ok(Self {
            binding,
            _exporter: exporter,
        })
    }

    /// Returns the port this Prometheus exporter is bound to.
    pub fn port(&self) -> u16 {
        self.binding.port()
    }
}
