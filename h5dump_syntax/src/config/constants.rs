pub mod compile_time {
    pub mod lexical {
        /// Buffer size above which a classification pass logs a warning (4MB)
        /// PERFORMANCE: Host editors rescan on every edit
        pub const DEFAULT_LARGE_BUFFER_BYTES: usize = 4 * 1024 * 1024;

        /// Upper bound accepted for the configurable large-buffer threshold (1GB)
        pub const MAX_LARGE_BUFFER_BYTES: usize = 1024 * 1024 * 1024;
    }

    pub mod folding {
        /// Region-open marker
        pub const OPEN_DELIMITER: char = '{';

        /// Region-close marker
        pub const CLOSE_DELIMITER: char = '}';

        /// String delimiter honored when quote-aware folding is enabled
        pub const QUOTE: char = '"';

        /// Escape character inside quoted strings
        pub const ESCAPE: char = '\\';
    }

    pub mod logging {
        /// Maximum events retained by a `MemoryLogger`
        /// RESOURCE: Bounds memory when a host never drains diagnostics
        pub const MAX_MEMORY_LOG_EVENTS: usize = 1000;
    }

    pub mod host {
        /// Mode name registered with host editors
        pub const MODE_NAME: &str = "h5dump";

        /// Human-readable language name
        pub const DISPLAY_NAME: &str = "HDF5 Dump";

        /// File extensions associated with the mode (without leading dot)
        pub const FILE_EXTENSIONS: &[&str] = &["h5dump", "ddl"];

        /// MIME type announced to hosts that key modes by MIME
        pub const MIME_TYPE: &str = "text/x-h5dump";
    }
}
