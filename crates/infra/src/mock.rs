//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! inventory-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::BTreeMap,
    sync::{
        Arc,
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use inventory_domain::product::{NewProduct, Product, ProductId};

use crate::{error::InfraError, repository::ProductRepository};

// ===== MockProductRepository =====

/// 自動採番付きのインメモリ商品ストア
///
/// ID は 1 から連番で採番する。削除済みの ID は再利用しない。
/// `calls()` でリポジトリが呼ばれた回数を確認できる。
#[derive(Clone, Default)]
pub struct MockProductRepository {
    inner: Arc<Mutex<MockStore>>,
    calls: Arc<AtomicUsize>,
}

#[derive(Default)]
struct MockStore {
    rows:    BTreeMap<ProductId, Product>,
    next_id: i64,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// ストアに直接商品を追加する（リポジトリ呼び出し回数には数えない）
    pub fn add_product(&self, product: NewProduct) -> Product {
        self.inner.lock().unwrap().insert(product)
    }

    /// 現在保持している商品数
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// トレイトメソッドが呼ばれた回数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl MockStore {
    fn insert(&mut self, product: NewProduct) -> Product {
        self.next_id += 1;
        let stored = Product::new(ProductId::new(self.next_id), product);
        self.rows.insert(stored.id(), stored.clone());
        stored
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, InfraError> {
        self.record_call();
        Ok(self.inner.lock().unwrap().rows.get(id).cloned())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, InfraError> {
        self.record_call();
        Ok(self.inner.lock().unwrap().insert(product.clone()))
    }

    async fn update(&self, product: &Product) -> Result<Product, InfraError> {
        self.record_call();
        let mut store = self.inner.lock().unwrap();
        if let Some(row) = store.rows.get_mut(&product.id()) {
            *row = product.clone();
        }
        Ok(product.clone())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), InfraError> {
        self.record_call();
        self.inner.lock().unwrap().rows.remove(id);
        Ok(())
    }
}

// ===== FailingProductRepository =====

/// 常にストアエラーを返すリポジトリ（接続断のシミュレーション）
#[derive(Clone, Default)]
pub struct FailingProductRepository;

impl FailingProductRepository {
    fn error() -> InfraError {
        InfraError::unexpected("ストアに接続できません")
    }
}

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn find_by_id(&self, _id: &ProductId) -> Result<Option<Product>, InfraError> {
        Err(Self::error())
    }

    async fn insert(&self, _product: &NewProduct) -> Result<Product, InfraError> {
        Err(Self::error())
    }

    async fn update(&self, _product: &Product) -> Result<Product, InfraError> {
        Err(Self::error())
    }

    async fn delete(&self, _id: &ProductId) -> Result<(), InfraError> {
        Err(Self::error())
    }
}
