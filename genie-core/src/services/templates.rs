//! Solidity sources returned by the contract generator.

pub const NFT_TEMPLATE: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.17;

import "@openzeppelin/contracts/token/ERC721/extensions/ERC721URIStorage.sol";
import "@openzeppelin/contracts/access/Ownable.sol";

contract GeneratedNFT is ERC721URIStorage, Ownable {
    uint256 private _tokenIds;
    
    constructor() ERC721("GeneratedNFT", "GNFT") {}
    
    function mintNFT(address recipient, string memory tokenURI) public onlyOwner returns (uint256) {
        uint256 newItemId = _tokenIds;
        _mint(recipient, newItemId);
        _setTokenURI(newItemId, tokenURI);
        _tokenIds++;
        return newItemId;
    }
}"#;

pub const TOKEN_TEMPLATE: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.17;

import "@openzeppelin/contracts/token/ERC20/ERC20.sol";
import "@openzeppelin/contracts/access/Ownable.sol";

contract GeneratedToken is ERC20, Ownable {
    constructor(uint256 initialSupply) ERC20("GeneratedToken", "GTKN") {
        _mint(msg.sender, initialSupply * 10 ** decimals());
    }
    
    function mint(address to, uint256 amount) public onlyOwner {
        _mint(to, amount);
    }
}"#;

pub const MARKETPLACE_TEMPLATE: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.17;

import "@openzeppelin/contracts/token/ERC721/IERC721.sol";
import "@openzeppelin/contracts/security/ReentrancyGuard.sol";
import "@openzeppelin/contracts/access/Ownable.sol";

contract GeneratedMarketplace is ReentrancyGuard, Ownable {
    struct Listing {
        address seller;
        address nftContract;
        uint256 tokenId;
        uint256 price;
        bool isActive;
    }
    
    uint256 private _listingId = 0;
    mapping(uint256 => Listing) public listings;
    uint256 public feePercent = 250; // 2.5%
    
    event ItemListed(uint256 listingId, address seller, address nftContract, uint256 tokenId, uint256 price);
    event ItemSold(uint256 listingId, address buyer, uint256 price);
    event ListingCancelled(uint256 listingId);
    
    function listItem(address nftContract, uint256 tokenId, uint256 price) external nonReentrant {
        require(price > 0, "Price must be greater than zero");
        IERC721(nftContract).transferFrom(msg.sender, address(this), tokenId);
        
        listings[_listingId] = Listing({
            seller: msg.sender,
            nftContract: nftContract,
            tokenId: tokenId,
            price: price,
            isActive: true
        });
        
        emit ItemListed(_listingId, msg.sender, nftContract, tokenId, price);
        _listingId++;
    }
    
    function buyItem(uint256 listingId) external payable nonReentrant {
        Listing storage listing = listings[listingId];
        require(listing.isActive, "Listing is not active");
        require(msg.value >= listing.price, "Insufficient payment");
        
        listing.isActive = false;
        
        uint256 fee = (listing.price * feePercent) / 10000;
        uint256 sellerAmount = listing.price - fee;
        
        payable(listing.seller).transfer(sellerAmount);
        
        IERC721(listing.nftContract).transferFrom(address(this), msg.sender, listing.tokenId);
        
        emit ItemSold(listingId, msg.sender, listing.price);
    }
    
    function cancelListing(uint256 listingId) external nonReentrant {
        Listing storage listing = listings[listingId];
        require(listing.seller == msg.sender || owner() == msg.sender, "Not authorized");
        require(listing.isActive, "Listing is not active");
        
        listing.isActive = false;
        
        IERC721(listing.nftContract).transferFrom(address(this), listing.seller, listing.tokenId);
        
        emit ListingCancelled(listingId);
    }
    
    function updateFeePercent(uint256 newFeePercent) external onlyOwner {
        require(newFeePercent <= 1000, "Fee cannot exceed 10%");
        feePercent = newFeePercent;
    }
    
    function withdrawFees() external onlyOwner {
        payable(owner()).transfer(address(this).balance);
    }
}"#;

pub const GENERIC_TEMPLATE: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.17;

import "@openzeppelin/contracts/access/Ownable.sol";

contract GeneratedContract is Ownable {
    // Contract variables
    string public name;
    
    // Events
    event ActionPerformed(address indexed performer, string action);
    
    constructor(string memory _name) {
        name = _name;
    }
    
    function performAction(string memory action) external {
        emit ActionPerformed(msg.sender, action);
    }
    
    function updateName(string memory _name) external onlyOwner {
        name = _name;
    }
}"#;
