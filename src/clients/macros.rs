/// Generates the lookup, delete and stop methods every entity client shares.
///
/// The client type needs an `inner: ResourceClient<$entity>` field and
/// `$error: From<FrameworkError>`.
#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: String) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from)
                }

                /// Removes the entity. Nothing that references it is touched.
                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $entity_name_snake>](&self, id: String) -> Result<$entity, $error> {
                    tracing::debug!("Sending request");
                    let removed = self.inner.delete(id).await.map_err(<$error>::from)?;
                    tracing::info!("Deleted");
                    Ok(removed)
                }

                /// Stops the backing actor; every clone of this client fails afterwards.
                #[tracing::instrument(skip(self))]
                pub async fn stop(&self) -> Result<(), $error> {
                    tracing::debug!("Sending request");
                    self.inner.stop().await.map_err(<$error>::from)
                }

                /// Current collection, without simulated latency.
                #[tracing::instrument(skip(self))]
                pub async fn snapshot(&self) -> Result<$crate::actor_framework::Snapshot<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.list().await.map_err(<$error>::from)
                }
            }
        }
    };
}
