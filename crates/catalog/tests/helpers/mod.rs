pub const CATALOG: &str = r#"{
  "products": [
    {"id":"egg","name":"Egg","category":"protein","kcal_per_100g":155,"protein_per_100g":13,
     "fat_per_100g":11,"carbs_per_100g":1.1,"fiber_per_100g":0,"allowed_substitutes":["egg-white","tofu-firm"]},
    {"id":"tofu-firm","name":"Tofu (Firm)","category":"protein","kcal_per_100g":144,"protein_per_100g":17,
     "fat_per_100g":8,"carbs_per_100g":3,"fiber_per_100g":2,"allowed_substitutes":["tempeh"]},
    {"id":"rice","name":"Rice","category":"carb","kcal_per_100g":130,"protein_per_100g":2.7,
     "fat_per_100g":0.3,"carbs_per_100g":28,"fiber_per_100g":0.4}
  ],
  "recipes": [
    {"id":"egg-bowl","name":"Egg Bowl","mealType":"breakfast","tags":["quick"],
     "instructions":["Boil rice","Fry eggs"],
     "ingredients":[{"productId":"egg","amount_g":100},{"productId":"rice","amount_g":150}]},
    {"name":"Tofu Rice","mealType":"dinner",
     "ingredients":[{"productId":"tofu-firm","amount_g":200},{"productId":"rice","amount_g":100}]}
  ]
}"#;
