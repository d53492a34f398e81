//! Query and mutation documents for the catalog service.
//!
//! The remote contract is three queries plus the order mutation. Documents
//! are plain strings; variables are supplied per call. Note the list query
//! requests a slimmer product shape than the detail query (no description,
//! no attribute ids).

/// Fetch a single product by id, with the full attribute and price shape.
pub const GET_PRODUCT: &str = r"
  query GetProduct($id: String!) {
    product(id: $id) {
      id
      name
      brand
      inStock
      gallery
      description
      category
      attributes {
        id
        name
        type
        items {
          id
          displayValue
          value
        }
      }
      prices {
        currency {
          symbol
          label
        }
        amount
      }
    }
  }
";

/// Fetch the full catalog. The service has no server-side category filter;
/// filtering happens client-side.
pub const GET_PRODUCTS: &str = r"
  query GetProducts {
    products {
      id
      name
      brand
      inStock
      gallery
      category
      attributes {
        name
        type
        items {
          id
          displayValue
          value
        }
      }
      prices {
        currency {
          symbol
          label
        }
        amount
      }
    }
  }
";

/// Fetch the category list.
pub const GET_CATEGORIES: &str = r"
  query GetCategories {
    categories {
      name
    }
  }
";

/// Submit an order built from the cart's line items.
pub const CREATE_ORDER: &str = r"
  mutation CreateOrder($input: OrderInput!) {
    createOrder(input: $input) {
      totalAmount
      createdAt
      items {
        productId
        quantity
        selectedAttributes {
          attributeName
          attributeItemId
          displayValue
        }
      }
    }
  }
";
