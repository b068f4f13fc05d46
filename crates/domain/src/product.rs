//! # 商品
//!
//! 在庫管理の対象となる商品（Product）のモデル。
//!
//! ## 設計判断
//!
//! ### ID はストアが採番する
//!
//! 商品 ID はデータベースの自動採番で決まる。クライアントから ID を
//! 受け取ることはないため、作成・更新の入力は ID を持たない [`NewProduct`]
//! で表現し、ID 付きの [`Product`] はストアの応答からのみ組み立てる。
//!
//! ### Newtype パターン
//!
//! `ProductId` は `i64` をラップした Newtype であり、数量（`quantity`）など
//! 他の整数との取り違えをコンパイル時に検出する。

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 商品の一意識別子
///
/// ストアの自動採番で決まり、作成後は変化しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する（sqlx のバインドパラメータ用）
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    /// パスパラメータから商品 ID をパースする
    ///
    /// 10 進整数として解釈できない値は `Validation` エラーになる。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("商品 ID は整数である必要があります: {s:?}")))
    }
}

/// 商品の可変属性（ID を除くフィールド）
///
/// 作成時と更新時の入力として使用する。
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name:     String,
    pub quantity: i32,
    pub price:    f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// 商品エンティティ
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id:       ProductId,
    name:     String,
    quantity: i32,
    price:    f64,
}

impl Product {
    /// ID と属性から商品を組み立てる
    ///
    /// 更新時は既存 ID に新しい属性を載せる形で使う。ID は変わらない。
    pub fn new(id: ProductId, attributes: NewProduct) -> Self {
        Self {
            id,
            name: attributes.name,
            quantity: attributes.quantity,
            price: attributes.price,
        }
    }

    /// データベースの行から復元する
    pub fn from_db(id: ProductId, name: String, quantity: i32, price: f64) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// ID を除いた属性を取り出す
    pub fn attributes(&self) -> NewProduct {
        NewProduct::new(self.name.clone(), self.quantity, self.price)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    #[case("-7", -7)]
    #[case("0", 0)]
    fn test_整数文字列から商品idをパースできる(#[case] input: &str, #[case] expected: i64) {
        let id: ProductId = input.parse().unwrap();
        assert_eq!(id.as_i64(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    #[case(" 1")]
    #[case("99999999999999999999")]
    fn test_整数でない文字列はバリデーションエラー(#[case] input: &str) {
        let result = input.parse::<ProductId>();
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_product_idはjsonで数値としてシリアライズされる() {
        let json = serde_json::to_value(ProductId::new(3)).unwrap();
        assert_eq!(json, serde_json::json!(3));
    }

    #[test]
    fn test_newで属性とidが設定される() {
        let product = Product::new(ProductId::new(5), NewProduct::new("keyboard", 100, 500.0));

        assert_eq!(product.id(), ProductId::new(5));
        assert_eq!(product.name(), "keyboard");
        assert_eq!(product.quantity(), 100);
        assert_eq!(product.price(), 500.0);
    }

    #[test]
    fn test_attributesはidを除いた値を返す() {
        let attributes = NewProduct::new("connector", 10, 100.0);
        let product = Product::new(ProductId::new(1), attributes.clone());

        assert_eq!(product.attributes(), attributes);
    }
}
