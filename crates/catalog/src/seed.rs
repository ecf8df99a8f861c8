//! Sample records the storefront ships with.

use time::macros::date;
use time::Date;

use crate::models::{Author, Book, Category, Money};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub(crate) fn categories() -> Vec<Category> {
    [
        ("1", "Fiction", "Novels, short stories, and literary fiction", 234),
        ("2", "Non-Fiction", "Biography, history, science, and more", 189),
        ("3", "Mystery & Thriller", "Suspenseful and thrilling stories", 156),
        ("4", "Romance", "Love stories and romantic novels", 98),
        ("5", "Science Fiction", "Futuristic and imaginative stories", 134),
        ("6", "Self-Help", "Personal development and improvement", 87),
    ]
    .into_iter()
    .map(|(id, name, description, book_count)| Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        book_count,
    })
    .collect()
}

pub(crate) fn authors() -> Vec<Author> {
    vec![
        Author {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            bio: "Bestselling author of contemporary fiction with over 2 million books sold worldwide."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            book_count: 12,
            website: Some("https://sarahjohnson.com".to_string()),
        },
        Author {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            bio: "Award-winning science fiction writer known for his innovative storytelling."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            book_count: 8,
            website: None,
        },
        Author {
            id: "3".to_string(),
            name: "Emma Davis".to_string(),
            bio: "Romance novelist and New York Times bestselling author.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            book_count: 15,
            website: None,
        },
        Author {
            id: "4".to_string(),
            name: "Robert Wilson".to_string(),
            bio: "Master of mystery and suspense with 20 years of writing experience.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            book_count: 18,
            website: None,
        },
    ]
}

struct Listing {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    description: &'static str,
    price: u64,
    original_price: Option<u64>,
    rating: f32,
    review_count: u32,
    category: &'static str,
    isbn: &'static str,
    publisher: &'static str,
    published_date: Date,
    pages: u32,
    featured: bool,
    bestseller: bool,
    new_release: bool,
}

impl From<Listing> for Book {
    fn from(listing: Listing) -> Self {
        Book {
            id: listing.id.to_string(),
            title: listing.title.to_string(),
            author: listing.author.to_string(),
            description: listing.description.to_string(),
            price: Money::from_cents(listing.price),
            original_price: listing.original_price.map(Money::from_cents),
            rating: listing.rating,
            review_count: listing.review_count,
            category: listing.category.to_string(),
            isbn: listing.isbn.to_string(),
            publisher: listing.publisher.to_string(),
            published_date: listing.published_date,
            pages: listing.pages,
            language: "English".to_string(),
            cover_image: PLACEHOLDER_IMAGE.to_string(),
            in_stock: true,
            featured: listing.featured,
            bestseller: listing.bestseller,
            new_release: listing.new_release,
        }
    }
}

pub(crate) fn books() -> Vec<Book> {
    vec![
        Listing {
            id: "1",
            title: "The Midnight Garden",
            author: "Sarah Johnson",
            description: "A captivating story about love, loss, and the magic that connects us all. When Emma inherits her grandmother's mysterious garden, she discovers more than just flowers and memories.",
            price: 2499,
            original_price: Some(2999),
            rating: 4.8,
            review_count: 342,
            category: "Fiction",
            isbn: "978-0-123456-78-9",
            publisher: "Harmony Books",
            published_date: date!(2024 - 01 - 15),
            pages: 384,
            featured: true,
            bestseller: true,
            new_release: false,
        },
        Listing {
            id: "2",
            title: "Quantum Dreams",
            author: "Michael Chen",
            description: "In a world where consciousness can be transferred between bodies, detective Alex Reed must solve a murder that defies the laws of physics and reality.",
            price: 2299,
            original_price: None,
            rating: 4.6,
            review_count: 189,
            category: "Science Fiction",
            isbn: "978-0-234567-89-0",
            publisher: "Future Press",
            published_date: date!(2023 - 11 - 03),
            pages: 432,
            featured: true,
            bestseller: false,
            new_release: true,
        },
        Listing {
            id: "3",
            title: "Hearts in Harmony",
            author: "Emma Davis",
            description: "When classical pianist Luna meets rock guitarist Jake, their worlds collide in the most beautiful way. A story of music, passion, and finding love where you least expect it.",
            price: 1999,
            original_price: None,
            rating: 4.7,
            review_count: 278,
            category: "Romance",
            isbn: "978-0-345678-90-1",
            publisher: "Love Stories Publishing",
            published_date: date!(2024 - 02 - 14),
            pages: 298,
            featured: true,
            bestseller: false,
            new_release: false,
        },
        Listing {
            id: "4",
            title: "The Silent Witness",
            author: "Robert Wilson",
            description: "Detective Morgan Kane thought she had seen it all, until a case involving a mute child witness to a brutal crime challenges everything she believes about justice.",
            price: 2699,
            original_price: None,
            rating: 4.9,
            review_count: 456,
            category: "Mystery & Thriller",
            isbn: "978-0-456789-01-2",
            publisher: "Crime & Mystery Co.",
            published_date: date!(2023 - 09 - 22),
            pages: 368,
            featured: false,
            bestseller: true,
            new_release: false,
        },
        Listing {
            id: "5",
            title: "Mindful Living",
            author: "Dr. Patricia Martinez",
            description: "Transform your life with practical mindfulness techniques. This comprehensive guide offers tools for reducing stress, improving focus, and finding inner peace.",
            price: 2199,
            original_price: None,
            rating: 4.5,
            review_count: 123,
            category: "Self-Help",
            isbn: "978-0-567890-12-3",
            publisher: "Wellness Books",
            published_date: date!(2024 - 03 - 01),
            pages: 256,
            featured: false,
            bestseller: false,
            new_release: true,
        },
        Listing {
            id: "6",
            title: "The History of Tomorrow",
            author: "Prof. David Thompson",
            description: "A fascinating exploration of how historical patterns can help us understand and predict future trends in technology, society, and human behavior.",
            price: 2899,
            original_price: None,
            rating: 4.4,
            review_count: 87,
            category: "Non-Fiction",
            isbn: "978-0-678901-23-4",
            publisher: "Academic Press",
            published_date: date!(2023 - 12 - 10),
            pages: 512,
            featured: false,
            bestseller: false,
            new_release: false,
        },
    ]
    .into_iter()
    .map(Book::from)
    .collect()
}
