use sqlx::PgPool;
use std::sync::Arc;

use crate::cliente::{ClienteService, PgClienteRepository};
use crate::config::AppConfig;
use crate::pedido::{PedidoService, PgPedidoRepository};
use crate::shipping::{FreightQuoter, ShippingService};
use crate::user_auth::UserAuthService;

/// Shared gateway state: one instance behind an `Arc`, handed to every
/// handler and the auth middleware.
pub struct AppState {
    pub db: PgPool,
    pub pedidos: PedidoService,
    pub clientes: ClienteService,
    pub frete: Arc<dyn FreightQuoter>,
    pub user_auth: UserAuthService,
}

impl AppState {
    pub fn new(pool: PgPool, config: &AppConfig) -> Result<Self, reqwest::Error> {
        let frete: Arc<dyn FreightQuoter> = Arc::new(ShippingService::new(&config.frete_api)?);
        let cliente_repo = Arc::new(PgClienteRepository::new(pool.clone()));
        let pedido_repo = Arc::new(PgPedidoRepository::new(pool.clone()));

        let pedidos = PedidoService::new(pedido_repo, cliente_repo.clone(), frete.clone());
        let clientes = ClienteService::new(cliente_repo);
        let user_auth = UserAuthService::new(pool.clone(), config.jwt_secret.clone());

        Ok(Self {
            db: pool,
            pedidos,
            clientes,
            frete,
            user_auth,
        })
    }
}
