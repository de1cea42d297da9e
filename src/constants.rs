//! Parametros de configuracion de la cocina.
//! Todas las duraciones estan en milisegundos.

use crate::color::Rgb;

/// Ancho de la pantalla (limite horizontal de los cocineros)
pub const SCREEN_WIDTH: f32 = 1280.0;

/// Alto de la pantalla (limite vertical de los cocineros)
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Cantidad de cocineros en la cocina
pub const N_CHEFS: usize = 2;

/// Lado del cuerpo de un cocinero
pub const CHEF_SIZE: f32 = 40.0;

/// Pixeles que avanza un cocinero por cuadro
pub const CHEF_SPEED: f32 = 2.0;

/// Probabilidad (en porcentaje) de que una hamburguesa pedida tenga dos medallones
pub const PROBABILITY_FOR_TWO_PATTIES: u32 = 15;

/// Probabilidad (en porcentaje) de que un pedido incluya bebida
pub const PROBABILITY_FOR_BEVERAGE: u32 = 60;

/// Probabilidad (en porcentaje) de que un pedido incluya papas fritas
pub const PROBABILITY_FOR_FRIES: u32 = 40;

pub const GRILL_COOKING_TICK: u64 = 200;
pub const GRILL_COOKING_STEPS: u32 = 20;

/// Tiempo que un medallon cocido espera en la parrilla antes de empezar a quemarse
pub const OVERCOOKING_DELAY: u64 = 10_000;
pub const OVERCOOKING_TICK: u64 = 100;
pub const OVERCOOKING_STEPS: u32 = 100;

pub const FRYING_TIME: u64 = 7_000;
pub const CUTTING_TIME: u64 = 1_500;
pub const FILLING_TIME: u64 = 4_000;

/// Duracion minima de un pedido antes de expirar
pub const MIN_EXPIRATION_TIME: u64 = 60_000;

/// Duracion maxima de un pedido antes de expirar
pub const MAX_EXPIRATION_TIME: u64 = 240_000;

/// Cada cuanto un pedido descuenta su tiempo restante
pub const ORDER_TICK: u64 = 200;

pub const TIME_BEFORE_FIRST_ORDER: u64 = 2_000;
pub const FIRST_ORDER_JITTER: u64 = 2_000;
pub const MIN_TIME_BETWEEN_ORDERS: u64 = 20_000;
pub const MAX_TIME_BETWEEN_ORDERS: u64 = 45_000;

/// Factor por el que se acelera la llegada de pedidos con cada entrega exitosa
pub const DELIVERY_ACCELERATION: f64 = 1.2;

pub const TIP_BASE: f64 = 1.0;
pub const TIP_PER_ITEM: f64 = 2.0;

/// Distancia del borde izquierdo donde empieza el tablero de pedidos
pub const BOARD_LEFT_OFFSET: f32 = 10.0;
/// Espacio entre los pedidos del tablero
pub const BOARD_SPACING: f32 = 70.0;
pub const BOARD_TOP: f32 = 10.0;
pub const ORDER_WIDTH: f32 = 60.0;
pub const ORDER_HEIGHT: f32 = 70.0;
/// Pixeles por cuadro que se desliza un pedido hacia su lugar
pub const ORDER_SLIDE_SPEED: f32 = 8.0;

/// Indica cuanto tiempo se debe de esperar (por lo menos) para imprimir las estadisticas de la cocina
pub const STATISTICS_WAIT_IN_MS: u64 = 5_000;

/// Cuadros por segundo del bucle principal
pub const MAX_FPS: u32 = 90;

/// Duracion de la partida sin interfaz que corre `main`
pub const DEMO_DURATION: u64 = 12_000;

pub const POTATO_COLOR: Rgb = Rgb(190, 160, 90);
pub const RAW_PATTY_COLOR: Rgb = Rgb(205, 105, 90);
pub const COOKED_PATTY_COLOR: Rgb = Rgb(105, 65, 45);
pub const BURNT_PATTY_COLOR: Rgb = Rgb(45, 25, 15);
pub const BUN_COLOR: Rgb = Rgb(145, 117, 72);
pub const CHEESE_COLOR: Rgb = Rgb(255, 185, 65);
pub const ONIONS_COLOR: Rgb = Rgb(200, 160, 160);
pub const LETTUCE_COLOR: Rgb = Rgb(54, 158, 31);
pub const TOMATO_COLOR: Rgb = Rgb(227, 107, 20);
pub const PICKLE_COLOR: Rgb = Rgb(25, 130, 56);

pub const COLA_COLOR: Rgb = Rgb(48, 32, 8);
pub const ORANGE_SODA_COLOR: Rgb = Rgb(240, 126, 25);
pub const LEMON_SODA_COLOR: Rgb = Rgb(170, 240, 160);
pub const LEMONADE_COLOR: Rgb = Rgb(240, 240, 155);
pub const PINK_LEMONADE_COLOR: Rgb = Rgb(240, 131, 131);

pub const FRIES_COLOR: Rgb = Rgb(255, 185, 65);
pub const BURNT_FRIES_COLOR: Rgb = Rgb(90, 60, 20);
