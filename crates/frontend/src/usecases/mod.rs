pub mod u001_checkout;
