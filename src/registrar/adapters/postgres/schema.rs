//! Diesel schema for registrar cluster persistence.

diesel::table! {
    /// Registrar cluster records.
    registrar_clusters (id) {
        /// Store-assigned identifier (`gen_random_uuid()` default).
        id -> Uuid,
        /// Human-readable cluster name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional region label.
        #[max_length = 255]
        region -> Nullable<Varchar>,
        /// Opaque credential document.
        kubeconfig -> Text,
        /// Registration timestamp.
        registered_at -> Timestamptz,
    }
}
